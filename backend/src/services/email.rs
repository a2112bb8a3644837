//! Email service for purchase-order notifications.
//!
//! Uses SMTP via lettre. Sending is best-effort: callers spawn it and never
//! wait for it, and a failure is logged and dropped.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::config::EmailConfig;

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Nobody to send to.
    #[error("No recipients")]
    NoRecipients,
}

/// Content of a new purchase-order notice
#[derive(Debug, Clone)]
pub struct PurchaseOrderNotice {
    pub order_code: String,
    pub supplier_name: String,
    pub supplier_email: Option<String>,
    pub product_name: String,
    pub quantity: i32,
}

impl PurchaseOrderNotice {
    pub fn subject(&self) -> String {
        format!("[ViaPro ERP] Novo Pedido de Compra: {}", self.order_code)
    }

    pub fn body(&self) -> String {
        format!(
            "Olá, {}!\n\nUm novo Pedido de Compra foi gerado.\n\n\
             Código: {}\nProduto: {}\nQuantidade: {} un\n\n\
             Atenciosamente,\nEquipe ViaPro",
            self.supplier_name, self.order_code, self.product_name, self.quantity
        )
    }

    /// Supplier first, then the internal list, without blanks or repeats
    pub fn recipients(&self, distribution_list: &[String]) -> Vec<String> {
        let mut recipients: Vec<String> = Vec::new();
        for address in self
            .supplier_email
            .iter()
            .chain(distribution_list.iter())
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
        {
            if !recipients.iter().any(|r| r.eq_ignore_ascii_case(address)) {
                recipients.push(address.to_string());
            }
        }
        recipients
    }
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    distribution_list: Vec<String>,
}

impl EmailService {
    /// Create a new email service from configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            distribution_list: config.distribution_list.clone(),
        })
    }

    /// Notify the supplier and the internal list about a new purchase order.
    pub async fn send_purchase_order_notice(
        &self,
        notice: &PurchaseOrderNotice,
    ) -> Result<(), EmailError> {
        let recipients = notice.recipients(&self.distribution_list);
        if recipients.is_empty() {
            return Err(EmailError::NoRecipients);
        }

        let from: Mailbox = self
            .from_address
            .parse()
            .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?;

        let mut builder = Message::builder().from(from).subject(notice.subject());
        for address in &recipients {
            let to: Mailbox = address
                .parse()
                .map_err(|_| EmailError::InvalidAddress(address.clone()))?;
            builder = builder.to(to);
        }

        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(notice.body())?;

        self.mailer.send(email).await?;

        tracing::info!(
            order_code = %notice.order_code,
            recipients = recipients.len(),
            "Purchase order notification sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(supplier_email: Option<&str>) -> PurchaseOrderNotice {
        PurchaseOrderNotice {
            order_code: "PC000126".to_string(),
            supplier_name: "Plásticos Sul".to_string(),
            supplier_email: supplier_email.map(str::to_string),
            product_name: "Suga Suga".to_string(),
            quantity: 40,
        }
    }

    #[test]
    fn test_recipients_supplier_first_without_duplicates() {
        let list = vec![
            "pcp@viapro.com".to_string(),
            "  ".to_string(),
            "VENDAS@plasticos.com".to_string(),
        ];
        let recipients = notice(Some("vendas@plasticos.com")).recipients(&list);
        assert_eq!(recipients, vec!["vendas@plasticos.com", "pcp@viapro.com"]);
    }

    #[test]
    fn test_recipients_without_supplier_email() {
        let list = vec!["pcp@viapro.com".to_string()];
        assert_eq!(notice(None).recipients(&list), vec!["pcp@viapro.com"]);
        assert!(notice(Some("")).recipients(&[]).is_empty());
    }

    #[test]
    fn test_send_without_recipients_fails_before_connecting() {
        let config = EmailConfig {
            enabled: true,
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: "estoque@viapro.com".to_string(),
            distribution_list: Vec::new(),
        };
        // The pooled transport spawns onto the runtime, so build it inside
        let result = tokio_test::block_on(async {
            let service = EmailService::new(&config).unwrap();
            service.send_purchase_order_notice(&notice(None)).await
        });
        assert!(matches!(result, Err(EmailError::NoRecipients)));
    }

    #[test]
    fn test_subject_and_body() {
        let n = notice(None);
        assert_eq!(n.subject(), "[ViaPro ERP] Novo Pedido de Compra: PC000126");
        assert!(n.body().contains("Código: PC000126"));
        assert!(n.body().contains("Quantidade: 40 un"));
    }
}
