//! Console front end for the query pipeline.
//!
//! Reads one message body per stdin line and prints the reply the bot would
//! send. The extension document archive is live (cached HTTP index), while
//! peer queries report unreachable since no messaging session is attached —
//! a session adapter implements the same ports against a real server.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use xrb_core::config::Config;
use xrb_core::errors::RemoteQueryError;
use xrb_core::handler::{InboundMessage, MessageHandler};
use xrb_core::ports::{
    ContactForm, MessageKind, MessageSenderPort, RemoteQueryPort, SoftwareVersion,
};
use xrb_xeps::XepArchive;

/// Peer queries need a live session; the console reports every peer as
/// unreachable instead.
struct OfflinePeers;

fn offline() -> RemoteQueryError {
    RemoteQueryError::new("service-unavailable", "no live messaging session")
}

#[async_trait]
impl RemoteQueryPort for OfflinePeers {
    async fn software_version(&self, _target: &str) -> Result<SoftwareVersion, RemoteQueryError> {
        Err(offline())
    }

    async fn last_activity(&self, _target: &str) -> Result<u64, RemoteQueryError> {
        Err(offline())
    }

    async fn contact_info(&self, _target: &str) -> Result<ContactForm, RemoteQueryError> {
        Err(offline())
    }
}

struct StdoutSender;

#[async_trait]
impl MessageSenderPort for StdoutSender {
    async fn send(&self, to: &str, body: &str, _kind: MessageKind) -> xrb_core::Result<()> {
        println!("-> {to}\n{body}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    xrb_core::logging::init("xrb")?;

    let cfg = Config::load()?;
    let docs = Arc::new(XepArchive::new(
        cfg.xeplist_url.clone(),
        cfg.xep_cache_dir.clone(),
    ));
    let handler = MessageHandler::new(
        cfg.nick.clone(),
        Arc::new(OfflinePeers),
        docs,
        Arc::new(StdoutSender),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let msg = InboundMessage {
            from: "console".to_string(),
            nick: "console".to_string(),
            kind: MessageKind::Direct,
            body: line,
        };
        handler.handle(&msg).await?;
    }

    Ok(())
}
