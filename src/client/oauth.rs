//! OAuth token endpoints

use super::SparkClient;
use crate::error::Result;
use crate::http::RequestOptions;
use crate::models::{AccessToken, AccessTokenRequest, RefreshTokenRequest};

impl SparkClient {
    /// Exchange an authorization code for an access token
    pub async fn request_access_token(
        &self,
        request: &AccessTokenRequest,
    ) -> Result<AccessToken> {
        self.call(
            RequestOptions::post()
                .path("/access_token")
                .form(request.to_form()),
        )
        .await
    }

    /// Trade a refresh token for a new access token
    pub async fn refresh_access_token(
        &self,
        request: &RefreshTokenRequest,
    ) -> Result<AccessToken> {
        self.call(
            RequestOptions::post()
                .path("/access_token")
                .form(request.to_form()),
        )
        .await
    }
}
