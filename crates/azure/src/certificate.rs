use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

use crate::error::CredentialError;

/// Decode an inline client certificate into PFX archive bytes.
///
/// Configuration transports the PKCS#12 archive as standard base64. An
/// empty value decodes to an empty vector: like every other credential
/// field, absence is not an error here. Whether a certificate is required
/// is judged by the code that builds the identity-provider client.
pub fn decode_client_certificate(client_certificate: &str) -> Result<Vec<u8>, CredentialError> {
    if client_certificate.is_empty() {
        return Ok(Vec::new());
    }
    Ok(B64.decode(client_certificate)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_certificate_decodes_to_empty_bytes() {
        assert_eq!(decode_client_certificate("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn valid_base64_round_trips() {
        let encoded = B64.encode(b"pfx archive bytes");
        let decoded = decode_client_certificate(&encoded).unwrap();
        assert_eq!(decoded, b"pfx archive bytes");
    }

    #[test]
    fn malformed_base64_is_certificate_error() {
        let err = decode_client_certificate("not%%%base64").unwrap_err();
        assert!(matches!(err, CredentialError::Certificate(_)));
        assert!(
            err.to_string()
                .starts_with("could not decode client certificate data")
        );
    }
}
