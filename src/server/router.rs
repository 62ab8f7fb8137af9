use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, auth, category, creation_flow, discussion, post, prediction, rank, search, team,
        template, user,
    },
    state::AppState,
};

/// OpenAPI document collected from every handler's `#[utoipa::path]`.
#[derive(OpenApi)]
#[openapi(
    info(title = "predictboard", description = "Prediction board API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        admin::get_users,
        admin::set_admin,
        admin::set_template_official,
        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,
        creation_flow::start_flow,
        creation_flow::get_flow,
        creation_flow::set_prediction,
        creation_flow::add_post,
        creation_flow::complete_flow,
        discussion::get_discussion,
        discussion::create_discussion_post,
        discussion::delete_discussion_post,
        discussion::create_comment,
        discussion::delete_comment,
        post::get_posts,
        post::get_post,
        post::create_post,
        post::delete_post,
        prediction::get_predictions,
        prediction::get_prediction,
        prediction::update_prediction,
        prediction::delete_prediction,
        prediction::publish_results,
        prediction::get_results,
        rank::get_leaderboard,
        search::search,
        team::get_teams,
        team::get_team,
        team::create_team,
        team::update_team,
        team::delete_team,
        template::get_templates,
        template::get_template,
        template::create_template,
        template::delete_template,
        user::get_profile,
        user::get_user_predictions,
        user::update_me,
    ),
    tags(
        (name = "auth", description = "Google login and session"),
        (name = "admin", description = "User and template administration"),
        (name = "category", description = "Prediction categories"),
        (name = "creation-flow", description = "Step-by-step prediction creation"),
        (name = "discussion", description = "Discussion threads and comments"),
        (name = "post", description = "Ranking, bracket and bingo posts"),
        (name = "prediction", description = "Predictions and their results"),
        (name = "rank", description = "Leaderboard"),
        (name = "search", description = "Search"),
        (name = "team", description = "Teams used in rankings and brackets"),
        (name = "template", description = "Reusable post templates"),
        (name = "user", description = "User profiles"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/admin/users", get(admin::get_users))
        .route("/api/admin/users/{user_id}/admin", put(admin::set_admin))
        .route(
            "/api/admin/templates/{format}/{template_id}/official",
            put(admin::set_template_official),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/{category_id}",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route("/api/creation-flow", post(creation_flow::start_flow))
        .route("/api/creation-flow/{token}", get(creation_flow::get_flow))
        .route(
            "/api/creation-flow/{token}/prediction",
            put(creation_flow::set_prediction),
        )
        .route(
            "/api/creation-flow/{token}/posts/{format}",
            post(creation_flow::add_post),
        )
        .route(
            "/api/creation-flow/{token}/complete",
            post(creation_flow::complete_flow),
        )
        .route("/api/predictions", get(prediction::get_predictions))
        .route(
            "/api/predictions/{prediction_id}",
            get(prediction::get_prediction)
                .put(prediction::update_prediction)
                .delete(prediction::delete_prediction),
        )
        .route(
            "/api/predictions/{prediction_id}/posts",
            get(post::get_posts),
        )
        .route(
            "/api/predictions/{prediction_id}/posts/{format}",
            post(post::create_post),
        )
        .route(
            "/api/predictions/{prediction_id}/results/{format}",
            get(prediction::get_results).post(prediction::publish_results),
        )
        .route(
            "/api/predictions/{prediction_id}/discussion",
            get(discussion::get_discussion).post(discussion::create_discussion_post),
        )
        .route(
            "/api/posts/{format}/{post_id}",
            get(post::get_post).delete(post::delete_post),
        )
        .route(
            "/api/discussion/{discussion_post_id}",
            delete(discussion::delete_discussion_post),
        )
        .route(
            "/api/discussion/{discussion_post_id}/comments",
            post(discussion::create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            delete(discussion::delete_comment),
        )
        .route("/api/ranks", get(rank::get_leaderboard))
        .route("/api/search", get(search::search))
        .route("/api/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/api/teams/{team_id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route("/api/templates", post(template::create_template))
        .route("/api/templates/{format}", get(template::get_templates))
        .route(
            "/api/templates/{format}/{template_id}",
            get(template::get_template).delete(template::delete_template),
        )
        .route("/api/users/me", put(user::update_me))
        .route("/api/users/{user_id}", get(user::get_profile))
        .route(
            "/api/users/{user_id}/predictions",
            get(user::get_user_predictions),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
