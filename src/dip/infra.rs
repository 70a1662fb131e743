// 🔌 Infra layer
// HTTP client. Nothing is sent over the wire, requests are rendered to the
// output sink.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use super::data::{ApiXptoClient, TransactionBrokerRequest};

pub struct ClientHttp<W: Write> {
    out: W,
}

impl<W: Write> ClientHttp<W> {
    pub fn new(out: W) -> Self {
        ClientHttp { out }
    }

    pub fn post<P: Serialize>(&mut self, params: &P) -> Result<()> {
        let body = serde_json::to_string(params).context("failed to encode request body")?;
        writeln!(self.out, "request... {}", body)?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ApiXptoClient for ClientHttp<W> {
    fn execute_transaction_value(&mut self, request: &TransactionBrokerRequest) -> Result<()> {
        self.post(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_renders_json_body() {
        let mut client = ClientHttp::new(Vec::new());
        client
            .execute_transaction_value(&TransactionBrokerRequest { value: 99.9 })
            .unwrap();

        let written = String::from_utf8(client.into_inner()).unwrap();
        assert_eq!(written, "request... {\"value\":99.9}\n");
    }
}
