use std::sync::Arc;
use tokio::sync::mpsc::{channel, Sender};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use super::{BookingError, BookingOutcome, BookingRequest, MailTransport};
use crate::persistence::BookingConfig;

const ACTION_BUFFER: usize = 32;

// Actions for the booking worker
#[derive(Debug)]
pub enum BookingAction {
    Send {
        request: BookingRequest,
        response_tx: oneshot::Sender<BookingOutcome>,
    },
}

/// Addressing and limits applied by the worker
#[derive(Debug, Clone)]
pub struct BookingSettings {
    pub sender: String,
    pub recipient: String,
    pub max_group_size: u32,
}

impl From<&BookingConfig> for BookingSettings {
    fn from(config: &BookingConfig) -> Self {
        Self {
            sender: config.sender.clone(),
            recipient: config.recipient.clone(),
            max_group_size: config.max_group_size,
        }
    }
}

/// Cloneable front of the booking worker task
#[derive(Debug, Clone)]
pub struct BookingHandle {
    tx: Sender<BookingAction>,
}

impl BookingHandle {
    pub fn spawn(transport: Arc<dyn MailTransport>, settings: BookingSettings) -> Self {
        let (tx, mut rx) = channel::<BookingAction>(ACTION_BUFFER);
        info!(
            "Spawning booking worker with {} transport, delivering to {}",
            transport.name(),
            settings.recipient
        );

        tokio::spawn(async move {
            while let Some(action) = rx.recv().await {
                match action {
                    BookingAction::Send {
                        request,
                        response_tx,
                    } => {
                        let outcome = match deliver(transport.as_ref(), &settings, &request).await
                        {
                            Ok(()) => {
                                info!(
                                    "Booking from {} for {} sent",
                                    request.email, request.selection
                                );
                                BookingOutcome::sent()
                            }
                            Err(e) => {
                                match &e {
                                    BookingError::Validation(reason) => {
                                        warn!("Rejected booking from {}: {}", request.email, reason)
                                    }
                                    _ => error!("Booking from {} failed: {}", request.email, e),
                                }
                                BookingOutcome::failed(&e)
                            }
                        };

                        if response_tx.send(outcome).is_err() {
                            debug!("Booking submitter went away before the outcome arrived");
                        }
                    }
                }
            }
            info!("Booking worker stopped, all handles dropped");
        });

        Self { tx }
    }

    /// Fire-and-forget submission; poll the receiver for the outcome
    pub fn submit(
        &self,
        request: BookingRequest,
    ) -> Result<oneshot::Receiver<BookingOutcome>, BookingError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.tx
            .try_send(BookingAction::Send {
                request,
                response_tx,
            })
            .map_err(|e| BookingError::ChannelError(e.to_string()))?;
        Ok(response_rx)
    }

    /// Sends a booking and waits for its outcome
    pub async fn send_booking_email(&self, request: BookingRequest) -> BookingOutcome {
        let (response_tx, response_rx) = oneshot::channel();
        if let Err(e) = self
            .tx
            .send(BookingAction::Send {
                request,
                response_tx,
            })
            .await
        {
            let error = BookingError::ChannelError(e.to_string());
            error!("{}", error);
            return BookingOutcome::failed(&error);
        }

        match response_rx.await {
            Ok(outcome) => outcome,
            Err(e) => BookingOutcome::failed(&BookingError::ChannelError(e.to_string())),
        }
    }
}

async fn deliver(
    transport: &dyn MailTransport,
    settings: &BookingSettings,
    request: &BookingRequest,
) -> Result<(), BookingError> {
    request.validate(settings.max_group_size)?;
    let mail = request.to_mail(&settings.sender, &settings.recipient);
    transport.deliver(&mail).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingKind, OutgoingMail, TransportError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingMail>>,
        fail: bool,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn deliver(&self, mail: &OutgoingMail) -> Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::Rejected {
                    status: 503,
                    body: "unavailable".into(),
                });
            }
            self.sent.lock().unwrap().push(mail.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn settings() -> BookingSettings {
        BookingSettings::from(&BookingConfig::default())
    }

    fn request(group_size: u32) -> BookingRequest {
        BookingRequest::new(
            "Ada",
            "ada@example.org",
            "",
            BookingKind::Tour,
            "Marsh birdwatching tour",
            group_size,
        )
    }

    #[tokio::test]
    async fn delivers_valid_booking() {
        let transport = Arc::new(RecordingTransport::default());
        let handle = BookingHandle::spawn(transport.clone(), settings());

        let outcome = handle.send_booking_email(request(4)).await;
        assert!(outcome.success);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["hello@tidewalk.example".to_string()]);
    }

    #[tokio::test]
    async fn invalid_booking_is_not_delivered() {
        let transport = Arc::new(RecordingTransport::default());
        let handle = BookingHandle::spawn(transport.clone(), settings());

        let outcome = handle.send_booking_email(request(40)).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Group size must be between 1 and 20")
        );
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_reported_once() {
        let transport = Arc::new(RecordingTransport {
            fail: true,
            ..Default::default()
        });
        let handle = BookingHandle::spawn(transport.clone(), settings());

        let outcome = handle.submit(request(2)).unwrap().await.unwrap();
        assert!(!outcome.success);
        assert!(outcome.message.is_some());
    }
}
