use crate::client::LANGUAGE;
use crate::models::GenreListResponse;
use crate::TmdbClient;

impl TmdbClient {
    /// Fetch the movie genre list.
    pub async fn genres(&self) -> crate::Result<GenreListResponse> {
        let params = [
            ("api_key".to_string(), self.api_key().to_string()),
            ("language".to_string(), LANGUAGE.to_string()),
        ];
        self.get_json("/genre/movie/list", &params).await
    }
}
