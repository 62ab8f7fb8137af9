use crate::{
    model::search::SearchResultsDto,
    server::model::{prediction::Prediction, team::Team, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub predictions: Vec<Prediction>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            predictions: self
                .predictions
                .into_iter()
                .map(Prediction::into_dto)
                .collect(),
            users: self.users.into_iter().map(User::into_dto).collect(),
            teams: self.teams.into_iter().map(Team::into_dto).collect(),
        }
    }
}
