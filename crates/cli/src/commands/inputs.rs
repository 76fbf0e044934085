//! Descriptor table listing

use anyhow::Result;
use cluster_inputs::{INPUTS, ReportTemplate};
use colored::Colorize;

use crate::output;

pub fn execute(json: bool) -> Result<()> {
    if json {
        return output::print_json("inputs", &INPUTS);
    }

    println!(
        "{}",
        format!("{:<3} {:<14} {:<8} {:<13} {}", "#", "INPUT", "CHANNEL", "MODE", "REPORT").bold()
    );
    for (row, descriptor) in INPUTS.iter().enumerate() {
        let channel = descriptor.channel.to_string();
        let mode = format!("{:?}", descriptor.mode);
        println!(
            "{:<3} {:<14} {:<8} {:<13} {}",
            row,
            descriptor.id,
            channel,
            mode,
            template_label(descriptor.template)
        );
    }
    Ok(())
}

fn template_label(template: ReportTemplate) -> String {
    match template {
        ReportTemplate::Icon(n) => format!("ICON {n}"),
        ReportTemplate::IconPressRelease(n) => format!("ICON {n} <P|R>"),
        ReportTemplate::Accelerate => "ACCL <P|R>".to_string(),
        ReportTemplate::Brake => "BREK <P|R>".to_string(),
        ReportTemplate::Gauge(kind) => format!("GAUG {} <0-100>", kind.code()),
        ReportTemplate::Ignition => "IGNT".to_string(),
        ReportTemplate::Hazard => "HZRD".to_string(),
        ReportTemplate::Gear => "GEAR[ L| S]".to_string(),
        ReportTemplate::Silent => "-".to_string(),
    }
}
