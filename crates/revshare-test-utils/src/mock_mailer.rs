// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock mailer that records outgoing mail.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use revshare_core::types::OutgoingEmail;
use revshare_core::{Mailer, RevshareError};

/// [`Mailer`] that records every send instead of talking SMTP.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail until cleared. Failed sends are not recorded.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Everything sent so far, in order.
    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }

    /// Number of sends so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), RevshareError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RevshareError::Mail {
                message: "injected mail failure".into(),
                source: None,
            });
        }
        self.sent.lock().await.push(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(subject: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: "ada@acme.io".into(),
            subject: subject.into(),
            html: "<p>hi</p>".into(),
            attachment: None,
        }
    }

    #[tokio::test]
    async fn records_sends_in_order() {
        let mailer = MockMailer::new();
        mailer.send(email("first")).await.unwrap();
        mailer.send(email("second")).await.unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "first");
        assert_eq!(sent[1].subject, "second");
    }

    #[tokio::test]
    async fn failed_sends_are_not_recorded() {
        let mailer = MockMailer::new();
        mailer.set_fail(true);
        assert!(mailer.send(email("lost")).await.is_err());
        assert_eq!(mailer.sent_count().await, 0);
    }
}
