//! Forms command implementation.

use anyhow::{Result, bail};
use jotform_client::JotformClient;
use jotform_client::models::{FormChoice, choices_from_data};
use tracing::info;

use crate::args::FormsCommand;

pub async fn run(client: &JotformClient, command: FormsCommand) -> Result<()> {
    match command {
        FormsCommand::List { json } => list(client, json).await,
        FormsCommand::Choices => {
            let choices = client.form_choices().await;
            print!("{}", format_choices(&choices));
            Ok(())
        }
    }
}

async fn list(client: &JotformClient, json: bool) -> Result<()> {
    info!("Fetching form list");
    let Some(data) = client.fetch_forms().await? else {
        bail!("Jotform settings are incomplete; set JOTFORM_API_URL and JOTFORM_API_KEY");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", format_choices(&choices_from_data(&data)));
    }
    Ok(())
}

/// Render choices as tab-separated `id<TAB>title` lines.
fn format_choices(choices: &[FormChoice]) -> String {
    choices
        .iter()
        .map(|choice| format!("{}\t{}\n", choice.id, choice.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_choices() {
        let choices = vec![FormChoice::new("1", "Form 1"), FormChoice::new("2", "Form 2")];
        assert_eq!(format_choices(&choices), "1\tForm 1\n2\tForm 2\n");
    }

    #[test]
    fn test_format_no_choices() {
        assert_eq!(format_choices(&[]), "");
    }
}
