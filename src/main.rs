use clap::Parser;

use puckboard::cli::{Cli, Command};
use puckboard::commands::{
    history::handle_history, matchups::handle_matchups, players::handle_players,
    records::handle_records, roster::handle_roster, settings::handle_settings,
    standings::handle_standings, team::handle_team, trends::handle_trends,
};
use puckboard::ACCESS_TOKEN_ENV_VAR;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Standings { common } => handle_standings(common.league_id, common.json).await,
        Command::Matchups { common, week } => {
            handle_matchups(common.league_id, week, common.json).await
        }
        Command::History { common } => handle_history(common.league_id, common.json).await,
        Command::Records { common } => handle_records(common.league_id, common.json).await,
        Command::Players {
            common,
            position,
            stat,
            limit,
        } => handle_players(common.league_id, position, stat, limit, common.json).await,
        Command::Trends {
            common,
            stat,
            limit,
        } => handle_trends(common.league_id, stat, limit, common.json).await,
        Command::Roster {
            common,
            team_id,
            week,
        } => handle_roster(common.league_id, team_id, week, common.json).await,
        Command::Team { common, team_id } => {
            handle_team(common.league_id, team_id, common.json).await
        }
        Command::Settings { common } => handle_settings(common.league_id, common.json).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        if err.is_auth() {
            eprintln!(
                "Connect your Yahoo account: set {} to a valid OAuth2 access token.",
                ACCESS_TOKEN_ENV_VAR
            );
            std::process::exit(2);
        }
        eprintln!("This is usually transient; try again in a moment.");
        std::process::exit(1);
    }
}
