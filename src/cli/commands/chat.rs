use anyhow::Result;
use tracing::info;

use crate::backend::{CannedBackend, HttpBackend};
use crate::chat::{ChatSession, SessionConfig};
use crate::cli::ChatArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let resolved = load_resolved_config(&args)?;

    if args.offline {
        info!("Starting offline chat");
        let config = SessionConfig::new("(offline)".to_string(), resolved.language, resolved.theme);
        let mut session = ChatSession::new(config, CannedBackend::new(resolved.language));
        return session.run().await;
    }

    info!(endpoint = %resolved.endpoint, "Starting chat");
    let config = SessionConfig::new(
        resolved.endpoint.to_string(),
        resolved.language,
        resolved.theme,
    );
    let mut session = ChatSession::new(config, HttpBackend::new(resolved.endpoint));
    session.run().await
}

fn load_resolved_config(args: &ChatArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let options = ResolveOptions {
        endpoint: args.endpoint.clone(),
        language: args.language.clone(),
        theme: args.theme.clone(),
    };

    resolve_config(&options, &file_config)
}
