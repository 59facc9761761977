use clap::{Args, Parser, Subcommand};
use color_eyre::{Result, eyre::eyre};
use std::io::Write;

use crate::app::build_signup_url;
use crate::config::Config;
use crate::content::{CONTACT_LINKS, MISSIONS, SIGNUP_EMPTY_EMAIL, STORIES, TOOLS};
use crate::services::{SystemOpener, UrlOpener};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "A friendly, playful tour of AI tools for every generation",
    long_about = "everyones-ai: a friendly, playful tour of AI tools for every generation.

Run without a command to open the interactive page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "List the tools shown in the carousel")]
    Tools,
    #[command(about = "Print every external link the page points to")]
    Links,
    #[command(about = "Print the signup link for an email address")]
    Join(JoinArgs),
    #[command(about = "Print the configuration file location")]
    ConfigPath,
}

#[derive(Args, Debug)]
pub struct JoinArgs {
    #[arg(long, env = "EVERYONES_AI_EMAIL")]
    pub email: String,
    /// Open the link in the default browser as well
    #[arg(long)]
    pub open: bool,
}

impl Command {
    pub fn run(self, config: &Config, out: &mut impl Write) -> Result<()> {
        match self {
            Command::Tools => {
                for line in tool_lines() {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Links => {
                for line in link_lines(config) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Join(args) => {
                let url = build_signup_url(&config.links.join_form_url, &args.email)?
                    .ok_or_else(|| eyre!(SIGNUP_EMPTY_EMAIL))?;
                writeln!(out, "{url}")?;
                if args.open {
                    SystemOpener.open(url.as_str())?;
                }
            }
            Command::ConfigPath => writeln!(out, "{}", Config::config_path()?.display())?,
        }
        Ok(())
    }
}

fn tool_lines() -> Vec<String> {
    TOOLS
        .iter()
        .enumerate()
        .map(|(index, tool)| {
            format!(
                "{}. {} - {}\n   {}\n   Try: \"{}\"",
                index + 1,
                tool.name,
                tool.description,
                tool.href,
                tool.sample_prompt
            )
        })
        .collect()
}

fn link_lines(config: &Config) -> Vec<String> {
    let links = &config.links;
    let mut lines = vec![
        format!("form            {}", links.form_link),
        format!("stories         {}", links.stories_playlist),
    ];
    lines.extend(
        STORIES
            .iter()
            .map(|story| format!("story {:<10}{}", story.id, story.video_url)),
    );
    lines.extend(
        TOOLS
            .iter()
            .map(|tool| format!("tool {:<11}{}", tool.id, tool.href)),
    );
    lines.extend(MISSIONS.iter().map(|mission| {
        format!("mission {:<8}{}", mission.id, links.mission_form(mission.form))
    }));
    lines.extend(
        CONTACT_LINKS
            .iter()
            .map(|(label, url)| format!("contact {:<8}{}", label.to_lowercase(), url)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_to_string(command: Command) -> Result<String> {
        let mut out = Vec::new();
        command.run(&Config::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["everyones-ai"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_tools_lists_every_tool() {
        let output = run_to_string(Command::Tools).unwrap();
        for tool in TOOLS {
            assert!(output.contains(tool.name));
            assert!(output.contains(tool.sample_prompt));
        }
    }

    #[test]
    fn test_links_include_forms_and_contacts() {
        let output = run_to_string(Command::Links).unwrap();
        assert!(output.contains(&Config::default().links.join_form_url));
        assert!(output.contains("https://github.com/Nirmal1710"));
        assert_eq!(output.lines().count(), 2 + STORIES.len() + TOOLS.len() + MISSIONS.len() + 3);
    }

    #[test]
    fn test_join_prints_signup_url() {
        let cli = Cli::try_parse_from(["everyones-ai", "join", "--email", "maya@example.com"]).unwrap();
        let output = run_to_string(cli.command.unwrap()).unwrap();
        assert_eq!(output.trim(), "https://huggingface.co/?email=maya%40example.com");
    }

    #[test]
    fn test_join_rejects_blank_email() {
        let error = run_to_string(Command::Join(JoinArgs {
            email: "  ".to_string(),
            open: false,
        }))
        .unwrap_err();
        assert_eq!(error.to_string(), SIGNUP_EMPTY_EMAIL);
    }
}
