use crate::member_card::configuration::Configuration;
use crate::tools::log_message_and_return;
use crate::web::error::WebError;
use crate::web::error::WebError::{CantReadResponseContent, ConnectionFailed, RequestRejected};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MemberCardRequest<'a> {
    zip: &'a str,
}

/// Ask the membership service for the card of `member_id`, proving its owner knows `zip_code`.
/// Neither value is checked beforehand: the service is the only judge.
/// Return the raw body of a successful response.
pub async fn request_member_card(
    client: &Client,
    configuration: &Configuration,
    member_id: &str,
    zip_code: &str,
) -> Result<Vec<u8>, WebError> {
    let url = configuration.request_url_for(member_id);
    let response = client
        .post(url)
        .bearer_auth(configuration.bearer_token())
        .json(&MemberCardRequest { zip: zip_code })
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach membership service",
            ConnectionFailed,
        ))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Member card request has been rejected [status: {status}, member_id: {member_id}]");
        return Err(RequestRejected(status.as_u16()));
    }

    let body = response.bytes().await.map_err(log_message_and_return(
        "Can't read member card response",
        CantReadResponseContent,
    ))?;

    Ok(body.to_vec())
}
