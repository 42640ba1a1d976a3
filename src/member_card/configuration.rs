use crate::member_card::error::MemberCardError;
use crate::member_card::error::MemberCardError::{MissingBearerToken, MissingRequestUrl};
use crate::tools::env_args::retrieve_expected_arg_value;
use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

const MEMBER_CARD_URL_ARG: &str = "--member-card-url";
const MEMBER_CARD_TOKEN_ARG: &str = "--member-card-token";
/// Replaced by the member id in the request URL.
pub const MEMBER_ID_PLACEHOLDER: &str = "{member_id}";

/// Where and how to reach the membership service.
#[derive(Getters, Clone, PartialEq)]
pub struct Configuration {
    request_url: String,
    bearer_token: String,
}

impl Configuration {
    pub fn new(request_url: String, bearer_token: String) -> Self {
        Self {
            request_url,
            bearer_token,
        }
    }

    /// Build the configuration from `--member-card-url=<url>` and `--member-card-token=<token>`.
    pub fn from_env_args() -> Result<Self, MemberCardError> {
        let request_url = retrieve_expected_arg_value(MEMBER_CARD_URL_ARG, MissingRequestUrl)?;
        let bearer_token = retrieve_expected_arg_value(MEMBER_CARD_TOKEN_ARG, MissingBearerToken)?;

        Ok(Self::new(request_url, bearer_token))
    }

    pub fn request_url_for(&self, member_id: &str) -> String {
        self.request_url.replace(MEMBER_ID_PLACEHOLDER, member_id)
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration {{request_url={}, bearer_token=MASKED}}",
            self.request_url
        )
    }
}
