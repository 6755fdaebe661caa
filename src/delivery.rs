//! Plan delivery over SMTP
//!
//! Sends the rendered plan to the traveler as the message body with the
//! same text attached as a `.txt` file. Delivery is strictly optional:
//! callers check `delivery_configured()` on the config before building a
//! mailer, and a delivery failure never invalidates the assembled plan.

use anyhow::{Context, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::SmtpTransport;
use lettre::{Message, Transport};
use tracing::info;

use crate::config::EmailConfig;
use crate::error::TripSmithError;

pub struct PlanMailer {
    transport: SmtpTransport,
    sender_address: String,
}

impl PlanMailer {
    /// Build a mailer from fully-configured delivery settings
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let (Some(address), Some(password)) =
            (config.sender_address.clone(), config.sender_password.clone())
        else {
            return Err(TripSmithError::delivery(
                "Email delivery is not configured (sender_address and sender_password required)",
            )
            .into());
        };

        let credentials = Credentials::new(address.clone(), password);
        let transport = SmtpTransport::relay(&config.smtp_relay)
            .with_context(|| format!("Failed to connect to SMTP relay {}", config.smtp_relay))?
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            sender_address: address,
        })
    }

    /// Send the rendered plan text to one recipient
    pub fn send_plan(
        &self,
        recipient: &str,
        destination: &str,
        plan_text: &str,
    ) -> Result<()> {
        let attachment = Attachment::new(format!(
            "trip_plan_{}.txt",
            destination.trim().to_lowercase().replace(' ', "_")
        ))
        .body(plan_text.to_string(), ContentType::TEXT_PLAIN);

        let email = Message::builder()
            .from(
                format!("TripSmith <{}>", self.sender_address)
                    .parse()
                    .context("Failed to parse sender address")?,
            )
            .to(recipient
                .parse()
                .with_context(|| format!("Failed to parse recipient address '{recipient}'"))?)
            .subject(format!("Your Trip Plan to {destination}"))
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(format!(
                        "Hello,\n\nYour personalized trip plan to {destination} is ready. \
                         The full plan is attached and included below.\n\n{plan_text}"
                    )))
                    .singlepart(attachment),
            )
            .context("Failed to build plan email")?;

        self.transport
            .send(&email)
            .context("Failed to send plan email")?;

        info!(recipient, destination, "trip plan delivered");
        Ok(())
    }
}
