//! Click-to-contact links
//!
//! Pure formatting: the links are handed to the host environment to open.

use url::Url;

use super::data::RugDetails;
use crate::config::ContactSettings;

/// Shown instead of a price when the listing has none
const PRICE_ON_REQUEST: &str = "Price on request";

/// Enquiry text for the selected rug, or a general greeting when nothing is selected
pub fn enquiry_message(settings: &ContactSettings, rug: Option<&RugDetails<'_>>) -> String {
    match rug {
        Some(rug) => format!(
            "Hello {business}, I'm interested in this rug:\n\n\
             Name: {name}\n\
             Product Number: {code}\n\
             Size: {size}\n\
             Material: {material}\n\
             Origin: {origin}\n\
             Price: {price}\n\n\
             Could you share availability and pricing details?",
            business = settings.business_name,
            name = rug.name,
            code = rug.product_code,
            size = rug.size,
            material = rug.material,
            origin = rug.origin,
            price = rug.price.unwrap_or(PRICE_ON_REQUEST),
        ),
        None => format!(
            "Hello {}, I'd like to know more about your handwoven rugs.",
            settings.business_name
        ),
    }
}

/// Messaging deep link: `https://<host>/<recipient>?text=<message>`
pub fn messaging_link(settings: &ContactSettings, rug: Option<&RugDetails<'_>>) -> String {
    let message = enquiry_message(settings, rug);
    let base = format!(
        "https://{}/{}",
        settings.messaging_host.trim_matches('/'),
        settings.recipient_id.trim_matches('/')
    );

    match Url::parse(&base) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("text", &message);
            url.into()
        }
        Err(err) => {
            // Still produce something the browser can try.
            tracing::warn!(%err, host = %settings.messaging_host, "invalid messaging host");
            let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
            format!("{}?text={}", base, encoded)
        }
    }
}

/// `tel:` link with whitespace removed from the configured number
pub fn phone_link(settings: &ContactSettings) -> String {
    let number: String = settings
        .phone_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("tel:{}", number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> ContactSettings {
        ContactSettings {
            business_name: "Aladdin's Ride".into(),
            messaging_host: "wa.me".into(),
            recipient_id: "15550100".into(),
            phone_number: "+1 555 0100".into(),
        }
    }

    fn rug(price: Option<&'static str>) -> RugDetails<'static> {
        RugDetails {
            name: "Persian Silk Design 3",
            product_code: "AR-003",
            size: "160×230 cm",
            material: "Silk & Cashmere",
            origin: "Iran",
            price,
            images: &[],
            description: "",
            stock: None,
        }
    }

    fn decoded_text(link: &str) -> String {
        let url = Url::parse(link).unwrap();
        url.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn test_message_embeds_rug_fields() {
        let message = enquiry_message(&settings(), Some(&rug(Some("$2,400"))));
        for needle in [
            "Persian Silk Design 3",
            "AR-003",
            "160×230 cm",
            "Silk & Cashmere",
            "Iran",
            "$2,400",
        ] {
            assert!(message.contains(needle), "missing {needle} in {message}");
        }
    }

    #[test]
    fn test_missing_price_reads_on_request() {
        let message = enquiry_message(&settings(), Some(&rug(None)));
        assert!(message.contains("Price: Price on request"));
    }

    #[test]
    fn test_general_enquiry_without_selection() {
        let message = enquiry_message(&settings(), None);
        assert_eq!(
            message,
            "Hello Aladdin's Ride, I'd like to know more about your handwoven rugs."
        );
    }

    #[test]
    fn test_messaging_link_shape_and_round_trip() {
        let details = rug(None);
        let link = messaging_link(&settings(), Some(&details));
        assert!(link.starts_with("https://wa.me/15550100?text="));
        assert!(!link.contains(' '));
        assert_eq!(decoded_text(&link), enquiry_message(&settings(), Some(&details)));
    }

    #[test]
    fn test_ampersand_in_material_stays_in_text() {
        let link = messaging_link(&settings(), Some(&rug(None)));
        let url = Url::parse(&link).unwrap();
        assert_eq!(url.query_pairs().count(), 1);
    }

    #[test]
    fn test_phone_link_strips_whitespace() {
        assert_eq!(phone_link(&settings()), "tel:+15550100");
    }
}
