use std::process::ExitCode;

use anyhow::{Context, bail};
use serde::Serialize;
use tracing::{debug, info};

use runstate_model::{RunAction, RunStatus, StatusGroup, StatusSet, is_member_str, taxonomy};
use runstate_observe::{LoggerConfig, logger_init};

const USAGE: &str = "usage:
  gating status <status>            groups and actions for a status
  gating group <group>              members of a group
  gating check <group> <status>     exit 0 if status is in group, 1 otherwise
  gating allowed <action> <status>  exit 0 if action is allowed, 1 otherwise";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    status: RunStatus,
    finished: bool,
    exit_code: i32,
    groups: Vec<StatusGroup>,
    actions: Vec<RunAction>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupReport {
    group: StatusGroup,
    canonical: StatusGroup,
    members: StatusSet,
}

fn main() -> anyhow::Result<ExitCode> {
    // 1) Logger
    let cfg = LoggerConfig::from_env()?;
    logger_init(&cfg)?;
    debug!(format = ?cfg.format, level = %cfg.level, "logger initialized");

    // 2) Command
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["status", raw] => {
            let status: RunStatus = raw.parse()?;
            let report = StatusReport {
                status,
                finished: status.is_finished(),
                exit_code: status.exit_code(),
                groups: taxonomy::groups_of(status),
                actions: RunAction::enabled_for(status),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        ["group", name] => {
            let group: StatusGroup = name.parse()?;
            let report = GroupReport {
                group,
                canonical: group.canonical(),
                members: group.members(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        ["check", name, raw] => {
            let group: StatusGroup = name.parse()?;
            let member = is_member_str(group, raw)
                .with_context(|| format!("checking membership in {group}"))?;
            info!(group = %group, status = raw, member, "membership checked");
            Ok(exit_for(member))
        }
        ["allowed", action, raw] => {
            let action: RunAction = action.parse()?;
            let status: RunStatus = raw.parse()?;
            let allowed = action.allowed_for(status);
            info!(action = %action, status = %status, allowed, "action gated");
            Ok(exit_for(allowed))
        }
        _ => bail!("{USAGE}"),
    }
}

fn exit_for(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
