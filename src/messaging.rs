// WhatsApp deep-link assembly for the contact form handoff.

use crate::config;
use crate::validation::ContactSubmission;

/// The pre-filled inquiry text, built from the submitted fields. The
/// service is the raw option value; everything else is what the visitor
/// typed (trimmed).
pub fn inquiry_message(sub: &ContactSubmission) -> String {
    format!(
        "Hello, I have an inquiry:\n\nName: {}\nEmail: {}\nPhone: {}\nService: {}\nMessage: {}",
        sub.name.trim(),
        sub.email.trim(),
        sub.phone.trim(),
        sub.service,
        sub.message.trim(),
    )
}

/// `https://wa.me/<number>?text=<encoded message>`, suitable for opening
/// in a new browsing context.
pub fn whatsapp_url(sub: &ContactSubmission) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(&inquiry_message(sub)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ahmed Ali".into(),
            email: "a@b.com".into(),
            phone: "+1234567".into(),
            service: "web-design".into(),
            message: "Need a storefront".into(),
            terms: true,
        }
    }

    #[test]
    fn url_targets_fixed_recipient() {
        let url = whatsapp_url(&submission());
        assert!(url.starts_with(&format!(
            "https://wa.me/{}?text=",
            config::WHATSAPP_NUMBER
        )));
    }

    #[test]
    fn url_carries_percent_encoded_fields() {
        let url = whatsapp_url(&submission());
        assert!(url.contains("Ahmed%20Ali"));
        assert!(url.contains("a%40b.com"));
        assert!(url.contains("%2B1234567"));
        assert!(url.contains("web-design"));
        assert!(url.contains("Need%20a%20storefront"));
        // Raw newlines never survive encoding.
        assert!(!url.contains('\n'));
    }

    #[test]
    fn message_template_lists_every_field() {
        let msg = inquiry_message(&submission());
        for line in [
            "Name: Ahmed Ali",
            "Email: a@b.com",
            "Phone: +1234567",
            "Service: web-design",
            "Message: Need a storefront",
        ] {
            assert!(msg.contains(line), "missing {:?}", line);
        }
    }
}
