//! Command implementations.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use inquiry_cli::http::{HttpSubmitCapability, wrap_payload};
use inquiry_model::{ContactField, FormField, InquiryPayload, SubmissionStatus};
use inquiry_submit::{IdSource, SubmissionController, UuidIdSource};
use inquiry_validate::{ErrorReport, contact_rules};

use crate::cli::{FormArgs, SubmitArgs};

/// List the contact form fields and their rule chains.
pub fn run_fields() {
    let rules = contact_rules();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Rules", "Messages"]);
    for field in ContactField::ALL {
        let chain = rules.rules_for(*field);
        let rules_cell = if chain.is_empty() {
            "none (always valid)".to_string()
        } else {
            format!("{} rule(s)", chain.len())
        };
        let messages = chain
            .iter()
            .map(|rule| rule.message())
            .filter(|message| !message.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        table.add_row(vec![field.name().to_string(), rules_cell, messages]);
    }
    println!("{table}");
}

/// Validate the form and print the findings. Returns aggregate validity.
pub fn run_validate(args: &FormArgs) -> bool {
    let controller = controller_from(args);
    let report = controller.error_report();
    print_findings(&report);
    report.is_valid()
}

/// Validate, then submit the inquiry. Returns the process exit code.
pub fn run_submit(args: &SubmitArgs) -> Result<i32> {
    let mut controller = controller_from(&args.form);
    let report = controller.error_report();
    if !report.is_valid() {
        print_findings(&report);
        return Ok(1);
    }

    if args.dry_run {
        let payload = InquiryPayload::from_snapshot(UuidIdSource.next_id(), controller.snapshot());
        println!("{}", serde_json::to_string_pretty(&wrap_payload(&payload))?);
        return Ok(0);
    }

    let capability = HttpSubmitCapability::new(args.endpoint.clone());
    controller.submit_with(&capability, &UuidIdSource);
    match controller.status() {
        SubmissionStatus::Success => {
            println!("Your inquiry has been submitted successfully!");
            Ok(0)
        }
        SubmissionStatus::Failed(message) => {
            eprintln!("{message}");
            Ok(1)
        }
        status => {
            // A synchronous attempt settles before submit_with returns.
            eprintln!("unexpected status: {}", status.label());
            Ok(1)
        }
    }
}

fn controller_from(args: &FormArgs) -> SubmissionController<ContactField> {
    let mut controller = SubmissionController::new(contact_rules());
    controller.edit(ContactField::UserName, args.name.clone());
    controller.edit(ContactField::Email, args.email.clone());
    controller.edit(ContactField::Subject, args.subject.clone());
    controller.edit(ContactField::Details, args.details.clone());
    controller
}

fn print_findings(report: &ErrorReport<ContactField>) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Status", "Message"]);
    for field in ContactField::ALL {
        let messages = report.messages(*field);
        let (status, message) = match messages.first() {
            Some(first) => (Cell::new("invalid").fg(Color::Red), first.as_str()),
            None => (Cell::new("ok").fg(Color::Green), ""),
        };
        table.add_row(vec![Cell::new(field.name()), status, Cell::new(message)]);
    }
    println!("{table}");
}
