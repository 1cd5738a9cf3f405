use clap::{Parser, Subcommand};
use seascore_cli::{output, CliError, Result};
use seascore_client::{
    CameraAdapter, ClientConfig, FileSourceFactory, HttpProofTransport, SubmissionFlow,
};
use seascore_core::{ChallengeCatalog, DecisionPolicy, Passport, RewardCatalog};
use seascore_server::{DetectorKind, ServerConfig};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "seascore")]
#[command(
    version,
    about = "SeaScore CLI - photo proof validation for plastic-reduction challenges"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the validation server
    Serve {
        /// Address to listen on
        #[arg(short = 'b', long)]
        bind: Option<SocketAddr>,

        /// Inference backend (mock or remote)
        #[arg(short = 'd', long)]
        detector: Option<DetectorKind>,

        /// Base URL of the remote backend
        #[arg(long)]
        detector_url: Option<String>,

        /// Directory uploads are spooled into
        #[arg(long)]
        temp_dir: Option<PathBuf>,

        /// Run inference calls one at a time
        #[arg(long)]
        serial: bool,
    },

    /// Submit a photo as proof for a challenge
    Submit {
        /// Challenge id, see `seascore challenges`
        #[arg(short = 'c', long)]
        challenge: String,

        /// Photo file to submit
        #[arg(short = 'i', long)]
        image: PathBuf,

        /// Validation endpoint
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Acceptance threshold override
        #[arg(short = 't', long)]
        threshold: Option<f32>,

        /// Record the completion when the verdict is valid
        #[arg(long)]
        accept: bool,

        /// Passport holder name
        #[arg(short = 'n', long, default_value = "CLI User")]
        holder: String,
    },

    /// List the built-in challenges
    Challenges {
        /// Emit the catalogue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the passport a set of completions produces
    Passport {
        /// Passport holder name
        #[arg(short = 'n', long, default_value = "CLI User")]
        holder: String,

        /// Completed challenge ids, comma separated
        #[arg(short = 'c', long, value_delimiter = ',')]
        completed: Vec<String>,

        /// Emit the passport as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            detector,
            detector_url,
            temp_dir,
            serial,
        } => {
            serve(bind, detector, detector_url, temp_dir, serial).await?;
        }
        Commands::Submit {
            challenge,
            image,
            endpoint,
            threshold,
            accept,
            holder,
        } => {
            submit(&challenge, &image, endpoint, threshold, accept, &holder).await?;
        }
        Commands::Challenges { json } => list_challenges(json)?,
        Commands::Passport {
            holder,
            completed,
            json,
        } => show_passport(&holder, &completed, json)?,
    }

    Ok(())
}

async fn serve(
    bind: Option<SocketAddr>,
    detector: Option<DetectorKind>,
    detector_url: Option<String>,
    temp_dir: Option<PathBuf>,
    serial: bool,
) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(detector) = detector {
        config.detector = detector;
    }
    if detector_url.is_some() {
        config.detector_url = detector_url;
    }
    if let Some(temp_dir) = temp_dir {
        config.temp_dir = temp_dir;
    }
    if serial {
        config.serialize_inference = true;
    }

    if config.detector == DetectorKind::Remote && config.detector_url.is_none() {
        return Err(CliError::InvalidConfig(
            "remote detector requires --detector-url".to_string(),
        ));
    }

    seascore_server::run(config).await?;
    Ok(())
}

async fn submit(
    challenge_id: &str,
    image: &Path,
    endpoint: Option<String>,
    threshold: Option<f32>,
    accept: bool,
    holder: &str,
) -> Result<()> {
    let catalog = ChallengeCatalog::builtin();
    let challenge = catalog
        .get(challenge_id)
        .ok_or_else(|| CliError::UnknownChallenge(challenge_id.to_string()))?
        .clone();

    let mut config = ClientConfig::from_env();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }

    info!("📤 Submitting {} for '{}'", image.display(), challenge.title);
    info!("Validation endpoint: {}", config.endpoint);

    let transport = HttpProofTransport::from_config(&config)
        .map_err(|e| CliError::InvalidConfig(e.to_string()))?;
    let camera = CameraAdapter::new(Box::new(FileSourceFactory::new(image.to_path_buf())));
    let policy = DecisionPolicy::new(config.threshold);
    let mut flow = SubmissionFlow::new(challenge, camera, transport, policy);

    flow.start_camera()
        .map_err(|e| CliError::Capture(e.to_string()))?;
    if !flow.capture().map_err(|e| CliError::Capture(e.to_string()))? {
        return Err(CliError::Capture("no frame available".to_string()));
    }

    let verdict = flow
        .submit()
        .await
        .map_err(|e| CliError::Submission(e.to_string()))?;

    if verdict.is_valid {
        info!("✅ {}", verdict.message);
    } else {
        warn!("❌ {}", verdict.message);
    }
    if !verdict.details.is_empty() {
        info!("   {}", verdict.details);
    }
    if let Some(confidence) = verdict.confidence {
        info!("   Confidence: {:.0}%", confidence * 100.0);
    }

    if accept && verdict.is_valid {
        let mut passport = Passport::new(holder.to_string());
        flow.accept(&mut passport)
            .map_err(|e| CliError::Submission(e.to_string()))?;
        info!(
            "🏅 Stamp recorded for {} (+{} points)",
            passport.holder(),
            passport.total_points()
        );
    }

    Ok(())
}

fn list_challenges(json: bool) -> Result<()> {
    let catalog = ChallengeCatalog::builtin();

    if json {
        println!("{}", output::challenges_json(&catalog)?);
        return Ok(());
    }

    println!("Challenges ({}):", catalog.len());
    for challenge in catalog.iter() {
        println!(
            "  {:<14} {:<28} {:>3} pts  [{}]",
            challenge.id, challenge.title, challenge.points, challenge.category
        );
    }
    Ok(())
}

fn show_passport(holder: &str, completed: &[String], json: bool) -> Result<()> {
    let catalog = ChallengeCatalog::builtin();
    let mut passport = Passport::new(holder.to_string());

    for id in completed {
        let challenge = catalog
            .get(id)
            .ok_or_else(|| CliError::UnknownChallenge(id.clone()))?;
        passport
            .record_completion(&challenge.id, challenge.points)
            .map_err(|e| CliError::InvalidConfig(e.to_string()))?;
    }

    if json {
        println!("{}", output::passport_json(&passport)?);
        return Ok(());
    }

    println!("Passport of {}", passport.holder());
    println!("  Stamps: {}", passport.stamp_count());
    println!("  Points: {}", passport.total_points());
    println!(
        "  Impact: ~{} bottles avoided, ~{} bags saved",
        passport.bottles_avoided(),
        passport.bags_saved()
    );

    let rewards = RewardCatalog::builtin();
    println!("Rewards:");
    for reward in rewards.iter() {
        let mark = if passport.can_redeem(reward) { "✔" } else { " " };
        println!(
            "  [{}] {:<18} {:>4} pts  {}",
            mark, reward.title, reward.points, reward.description
        );
    }

    Ok(())
}
