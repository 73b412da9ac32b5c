use clap::Parser;
use crmd::cli::{Action, Cli};
use crmd::error::CrmdError;
use crmd::reminder::{
    create_reminder_controller, list_reminders_controller, resolve_reminder_controller,
};
use crmd::telemetry::{get_subscriber, init_subscriber};
use crmd_infra::setup_context;

fn main() {
    let subscriber = get_subscriber("crmd=info".into());
    init_subscriber(subscriber);

    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let action = match cli.action() {
        Ok(action) => action,
        Err(e) => return report(&e),
    };

    let ctx = setup_context();

    let output = match action {
        Action::Create {
            description,
            timestamp,
            recurrence,
        } => create_reminder_controller(&ctx, description, timestamp, recurrence),
        Action::ListDue => list_reminders_controller(&ctx, false),
        Action::ListAll => list_reminders_controller(&ctx, true),
        Action::Complete(id) => resolve_reminder_controller(&ctx, id, true),
        Action::Delete(id) => resolve_reminder_controller(&ctx, id, false),
    };

    match output {
        Ok(lines) => {
            if !lines.is_empty() {
                println!("{}", lines);
            }
            0
        }
        Err(e) => report(&e),
    }
}

fn report(e: &CrmdError) -> i32 {
    println!("{}", e);
    e.exit_code()
}
