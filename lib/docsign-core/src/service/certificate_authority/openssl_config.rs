use indoc::formatdoc;

use super::dto::{CertificateProfile, CertificateSubject};
use crate::config::core_config::CertificateSubjectConfig;

pub(super) const CA_EXTENSIONS: &str = "v3_ca";
pub(super) const REQUEST_EXTENSIONS: &str = "v3_req";

pub(super) fn ca_config(subject: &CertificateSubjectConfig) -> String {
    formatdoc! {"
        [req]
        distinguished_name = req_distinguished_name
        x509_extensions = {ca_extensions}
        prompt = no
        utf8 = yes
        string_mask = utf8only

        [req_distinguished_name]
        C = {country}
        ST = {state}
        L = {locality}
        O = {organization}
        OU = {organizational_unit}
        CN = {common_name}

        [{ca_extensions}]
        basicConstraints = CA:TRUE
        keyUsage = keyCertSign, cRLSign
        subjectKeyIdentifier = hash
        authorityKeyIdentifier = keyid:always,issuer:always
        ",
        country = subject.country,
        state = subject.state,
        locality = subject.locality,
        organization = subject.organization,
        organizational_unit = subject.organizational_unit,
        common_name = subject.common_name,
        ca_extensions = CA_EXTENSIONS,
    }
}

pub(super) fn request_config(subject: &CertificateSubject, profile: CertificateProfile) -> String {
    let email = subject
        .email
        .as_ref()
        .map(|email| format!("emailAddress = {email}\n"))
        .unwrap_or_default();

    let (usage, alt_names) = match profile {
        CertificateProfile::Standard => (
            "keyUsage = digitalSignature, keyEncipherment\nextendedKeyUsage = clientAuth, emailProtection",
            match dns_label(&subject.common_name) {
                Some(label) => format!("DNS.1 = {label}\nDNS.2 = localhost"),
                None => "DNS.1 = localhost".to_string(),
            },
        ),
        CertificateProfile::PdfSigning => (
            "keyUsage = nonRepudiation, digitalSignature, keyEncipherment",
            "DNS.1 = localhost\nDNS.2 = 127.0.0.1".to_string(),
        ),
    };

    formatdoc! {"
        [req]
        distinguished_name = req_distinguished_name
        req_extensions = {request_extensions}
        prompt = no
        utf8 = yes
        string_mask = utf8only

        [req_distinguished_name]
        C = {country}
        ST = {state}
        L = {locality}
        O = {organization}
        OU = {organizational_unit}
        CN = {common_name}
        {email}
        [{request_extensions}]
        basicConstraints = CA:FALSE
        {usage}
        subjectAltName = @alt_names

        [alt_names]
        {alt_names}
        ",
        country = subject.country,
        state = subject.state,
        locality = subject.locality,
        organization = subject.organization,
        organizational_unit = subject.organizational_unit,
        common_name = subject.common_name,
        email = email,
        usage = usage,
        alt_names = alt_names,
        request_extensions = REQUEST_EXTENSIONS,
    }
}

/// ASCII letters, digits, `-` and `.` only; whitespace becomes `-`.
fn dns_label(common_name: &str) -> Option<String> {
    let label: String = common_name
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '.' => Some(c),
            _ => None,
        })
        .collect();

    let label = label.trim_matches('-');
    (!label.is_empty()).then(|| label.to_string())
}
