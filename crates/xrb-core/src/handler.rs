//! One inbound message, one handling cycle: tokenize, build the queue,
//! dispatch, assemble, send.
//!
//! All per-message state lives on the stack of [`MessageHandler::handle`];
//! concurrent cycles share nothing but the read-only command table and the
//! ports.

use std::sync::Arc;

use tracing::debug;

use crate::commands::mention_answer;
use crate::dispatch::Dispatcher;
use crate::ports::{
    ExtensionDocsPort, MessageKind, MessageSenderPort, RemoteQueryPort,
};
use crate::{queue, reply, tokenize, Result};

/// An inbound message as delivered by the session layer.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    /// Bare address the reply goes back to.
    pub from: String,
    /// Room nickname of the sender; empty for direct messages.
    pub nick: String,
    pub kind: MessageKind,
    pub body: String,
}

/// The bot's message entry point, shared by all handling cycles.
pub struct MessageHandler {
    nick: String,
    dispatcher: Dispatcher,
    sender: Arc<dyn MessageSenderPort>,
}

impl MessageHandler {
    pub fn new(
        nick: impl Into<String>,
        queries: Arc<dyn RemoteQueryPort>,
        docs: Arc<dyn ExtensionDocsPort>,
        sender: Arc<dyn MessageSenderPort>,
    ) -> Self {
        Self {
            nick: nick.into(),
            dispatcher: Dispatcher::new(queries, docs),
            sender,
        }
    }

    /// Process one inbound message and send at most one reply.
    pub async fn handle(&self, msg: &InboundMessage) -> Result<()> {
        // Own messages are never processed, otherwise the bot would feed on
        // its replies.
        if msg.nick == self.nick {
            return Ok(());
        }

        let mut lines = Vec::new();
        if msg.kind == MessageKind::GroupChat && msg.body.contains(&self.nick) {
            lines.push(mention_answer(&msg.nick));
        }

        let tokens = tokenize::tokenize(&msg.body);
        let jobs = queue::build(&tokens);
        debug!(from = %msg.from, jobs = jobs.len(), "handling message");

        lines.extend(self.dispatcher.run(&jobs).await);

        let Some(body) = reply::assemble(lines, msg.kind, &msg.nick) else {
            return Ok(());
        };
        self.sender.send(&msg.from, &body, msg.kind).await
    }
}
