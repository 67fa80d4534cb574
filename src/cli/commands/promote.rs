use crate::AppContext;
use crate::cli::commands::load_view;
use crate::cli::commands::summary::render_summary;
use crate::cli::parser::Commands;
use crate::core::aggregate::{promotion_candidates, summarize};
use crate::errors::AppResult;
use crate::notify::{NotifyOutcome, SmtpMailer, send_promotion_alert};
use crate::ui::messages::{error, header, info, success};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Promote { filters, email } = cmd {
        let (_, view) = load_view(ctx, filters);
        let candidates = promotion_candidates(&summarize(&view));

        header("Promotion Watch");

        if candidates.is_empty() {
            info("No current promotion candidates.");
            return Ok(());
        }

        success("These staff are eligible for promotion:");
        print!("{}", render_summary(&candidates));

        if *email {
            let mailer = SmtpMailer::new(
                &ctx.cfg.smtp_host,
                ctx.cfg.smtp_port,
                ctx.mail.clone(),
            );

            // A failed send is reported but does not fail the command.
            match send_promotion_alert(&mailer, ctx.mail.user.as_deref(), &candidates) {
                NotifyOutcome::Sent => success("Email sent successfully!"),
                NotifyOutcome::Failed(reason) => error(format!("Email failed: {reason}")),
            }
        }
    }
    Ok(())
}
