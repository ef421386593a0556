//! Remote reply policy: one `POST /chat` per turn, no retry.

use async_trait::async_trait;
use nuwa_core::reply::{ReplyError, ReplyPolicy};

use crate::{ChatServiceClient, ClientError};

/// Asks the chat service for every reply.
#[derive(Debug, Clone)]
pub struct RemoteReplyPolicy {
    client: ChatServiceClient,
}

impl RemoteReplyPolicy {
    pub fn new(client: ChatServiceClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ChatServiceClient {
        &self.client
    }
}

impl From<ClientError> for ReplyError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Status { status, .. } => ReplyError::Status(status),
            ClientError::Decode(msg) => ReplyError::Decode(msg),
            ClientError::Http(e) if e.is_decode() => ReplyError::Decode(e.to_string()),
            other => ReplyError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl ReplyPolicy for RemoteReplyPolicy {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn acquire(&self, text: &str) -> Result<String, ReplyError> {
        let resp = self.client.chat(text).await?;
        if resp.reply.trim().is_empty() {
            return Err(ReplyError::Decode("empty reply".into()));
        }
        Ok(resp.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_keep_code() {
        let err: ReplyError = ClientError::Status {
            status: 503,
            body: "down".into(),
        }
        .into();
        assert_eq!(err, ReplyError::Status(503));
    }

    #[test]
    fn decode_errors_map_to_decode() {
        let err: ReplyError = ClientError::Decode("eof".into()).into();
        assert_eq!(err, ReplyError::Decode("eof".into()));
    }
}
