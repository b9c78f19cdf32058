use std::io::Read;

use anyhow::Context;
use syl_query::{QueryService, RawOutputClassifier};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl ask`.
pub fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_classification(&args.classification)?;
    let service = QueryService::from_config(&ctx.config, RawOutputClassifier::new(raw))
        .context("failed to build question pipeline")?;

    let response = service.answer(&args.question, args.course.as_deref());
    if response.refused {
        tracing::info!(
            reason = response.refusal_reason.as_deref().unwrap_or_default(),
            "question refused"
        );
    }
    output(&response, flags.format)
}

/// `-` reads the classifier output from stdin; anything else is the output itself.
fn read_classification(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read classification from stdin")?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::read_classification;

    #[test]
    fn inline_classification_passes_through() {
        let raw = r#"{"intent": "links", "slots": {}, "confidence": 0.9}"#;
        assert_eq!(read_classification(raw).expect("inline"), raw);
    }
}
