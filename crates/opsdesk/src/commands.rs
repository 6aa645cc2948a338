// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations for the opsdesk binary.

use std::process::ExitCode;
use std::str::FromStr;

use chrono::Utc;
use colored::{ColoredString, Colorize};

use opsdesk_core::{RequestDraft, RequestId, RequestPatch, RequestStatus, ServiceRequest};
use opsdesk_store::RequestStore;

/// Color a status for terminal listings.
fn paint(status: RequestStatus) -> ColoredString {
    match status {
        RequestStatus::Pending => status.to_string().red().bold(),
        RequestStatus::Submitted => status.to_string().yellow(),
        RequestStatus::AwaitingApproval => status.to_string().yellow(),
        RequestStatus::Approved | RequestStatus::InProgress => status.to_string().cyan(),
        RequestStatus::Completed => status.to_string().green(),
        RequestStatus::Rejected => status.to_string().dimmed(),
    }
}

pub async fn submit(store: &mut RequestStore, title: String, requester: String) -> ExitCode {
    let id = store.submit(RequestDraft { title, requester }).await;
    println!("submitted {id}");
    ExitCode::SUCCESS
}

pub fn list(store: &RequestStore) -> ExitCode {
    if store.list().is_empty() {
        println!("no requests");
        return ExitCode::SUCCESS;
    }
    for request in store.list() {
        println!(
            "{}  {:>18}  {}  {}",
            request.id,
            paint(request.status),
            request.submitted_at.format("%Y-%m-%d"),
            request.title
        );
    }
    ExitCode::SUCCESS
}

pub fn show(store: &RequestStore, id: &str) -> ExitCode {
    let id = RequestId(id.to_string());
    let Some(request) = store.get(&id) else {
        eprintln!("opsdesk: no request with id {id}");
        return ExitCode::FAILURE;
    };
    print_request(request);
    ExitCode::SUCCESS
}

fn print_request(request: &ServiceRequest) {
    println!("id:           {}", request.id);
    println!("title:        {}", request.title);
    println!("requester:    {}", request.requester);
    println!("submitted at: {}", request.submitted_at.to_rfc3339());
    println!("status:       {}", paint(request.status));
    if request.was_auto_transitioned {
        let previous = request
            .previous_status
            .map(|s| s.to_string())
            .unwrap_or_default();
        let at = request
            .auto_transitioned_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        println!("escalated:    from {previous} at {at}");
        if let Some(reason) = &request.auto_transition_reason {
            println!("reason:       {reason}");
        }
    }
}

pub async fn set_status(store: &mut RequestStore, id: &str, status: &str) -> ExitCode {
    let status = match RequestStatus::from_str(status) {
        Ok(status) => status,
        Err(_) => {
            eprintln!(
                "opsdesk: unknown status `{status}` (expected one of Submitted, Approved, \
                 InProgress, AwaitingApproval, Completed, Rejected, Pending)"
            );
            return ExitCode::FAILURE;
        }
    };

    let id = RequestId(id.to_string());
    let patch = RequestPatch {
        status: Some(status),
        ..RequestPatch::default()
    };
    if store.update(&id, patch).await {
        println!("{id} -> {}", paint(status));
        ExitCode::SUCCESS
    } else {
        eprintln!("opsdesk: no request with id {id}");
        ExitCode::FAILURE
    }
}

pub async fn remove(store: &mut RequestStore, id: &str) -> ExitCode {
    let id = RequestId(id.to_string());
    if store.remove(&id).await {
        println!("removed {id}");
        ExitCode::SUCCESS
    } else {
        eprintln!("opsdesk: no request with id {id}");
        ExitCode::FAILURE
    }
}

pub async fn sweep(store: &mut RequestStore) -> ExitCode {
    let escalated = store.reevaluate_all(Utc::now()).await;
    match escalated {
        0 => println!("sweep complete, nothing escalated"),
        1 => println!("sweep complete, {} request escalated", "1".red().bold()),
        n => println!(
            "sweep complete, {} requests escalated",
            n.to_string().red().bold()
        ),
    }
    ExitCode::SUCCESS
}
