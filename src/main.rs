use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

use movienight_bot::config::Config;
use movienight_bot::database;
use movienight_bot::handler::Handler;
use movienight_bot::model::AppState;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "movienight_bot=info".into()),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let server_id = env::var("SERVER_ID")
        .expect("Expected SERVER_ID in the environment.")
        .parse::<u64>()
        .expect("SERVER_ID must be a valid number.");
    let allowed_guild_id = GuildId::new(server_id);

    let config = Arc::new(Config::from_env());

    let pool = database::init::connect(&config.database_url)
        .await
        .expect("Failed to open the movie database.");
    database::init::create_schema(&pool)
        .await
        .expect("Failed to initialize the movie database schema.");

    let app_state = Arc::new(AppState { db: pool, config });

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { allowed_guild_id })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        tracing::error!("Client error: {why:?}");
    }
}
