mod category;
mod creation_flow;
mod discussion;
mod leaderboard;
mod post;
mod prediction;
mod team;
mod template;
mod user;
