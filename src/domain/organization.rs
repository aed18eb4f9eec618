use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub verified_domains: Vec<VerifiedDomain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedDomain {
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_initial: bool,
}

impl Organization {
    /// The default verified domain, falling back to the initial `onmicrosoft.com` one.
    pub fn default_domain(&self) -> Option<&str> {
        self.verified_domains
            .iter()
            .find(|domain| domain.is_default)
            .or_else(|| self.verified_domains.iter().find(|domain| domain.is_initial))
            .map(|domain| domain.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(name: &str, is_default: bool, is_initial: bool) -> VerifiedDomain {
        VerifiedDomain {
            name: name.to_string(),
            is_default,
            is_initial,
        }
    }

    #[test]
    fn default_domain_prefers_the_default_one() {
        let organization = Organization {
            id: "tenant".to_string(),
            display_name: None,
            verified_domains: vec![domain("contoso.onmicrosoft.com", false, true), domain("contoso.com", true, false)],
        };

        assert_eq!(organization.default_domain(), Some("contoso.com"));
    }

    #[test]
    fn default_domain_falls_back_to_the_initial_one() {
        let organization = Organization {
            id: "tenant".to_string(),
            display_name: None,
            verified_domains: vec![domain("contoso.onmicrosoft.com", false, true)],
        };

        assert_eq!(organization.default_domain(), Some("contoso.onmicrosoft.com"));
    }
}
