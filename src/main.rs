// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pavelife CLI entrypoint.
//!
//! By default this renders the stored timeline to stdout. Mutating commands
//! apply their op, persist the plan, then render the updated timeline; invalid
//! mutations are skipped with a note on stderr rather than failing.

use std::error::Error;

use pavelife::model::{EventId, PathId, RandomIds, TodoId};
use pavelife::ops::{apply_ops, EventOp, Op, PathOp, TodoOp};
use pavelife::store::{PlanFolder, WriteDurability};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<plan-dir>] [flags]\n  {program} [<plan-dir>] [flags] add-event <age> <title> [--path <path-id>]\n  {program} [<plan-dir>] [flags] update-event <event-id> <age> <title>\n  {program} [<plan-dir>] [flags] remove-event <event-id>\n  {program} [<plan-dir>] [flags] add-path <title> [<memos>]\n  {program} [<plan-dir>] [flags] update-path <path-id> <title> [<memos>]\n  {program} [<plan-dir>] [flags] remove-path <path-id>\n  {program} [<plan-dir>] [flags] todo add <event-id> <text>\n  {program} [<plan-dir>] [flags] todo toggle <event-id> <todo-id>\n  {program} [<plan-dir>] [flags] todo remove <event-id> <todo-id>\n  {program} [<plan-dir>] [flags] todo set-text <event-id> <todo-id> <text>\n  {program} [<plan-dir>] [flags] settings <birth-date> <current-age> <life-expectancy>\n\nFlags (before the command):\n  --plan <dir>       plan folder (default: current working directory)\n  --demo             render the built-in demo plan without touching disk\n  --durable-writes   slower, best-effort durable persistence (fsync where supported)\n  --log-level <lvl>  trace|debug|info|warn|error\n\nWithout a command the stored timeline is rendered to stdout. Mutating\ncommands apply, persist, then render; invalid mutations are skipped with a\nnote on stderr. --demo cannot be combined with <plan-dir>/--plan."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum CliCommand {
    #[default]
    Show,
    AddEvent {
        age: u32,
        title: String,
        path_id: Option<String>,
    },
    UpdateEvent {
        event_id: String,
        age: u32,
        title: String,
    },
    RemoveEvent {
        event_id: String,
    },
    AddPath {
        title: String,
        memos: String,
    },
    UpdatePath {
        path_id: String,
        title: String,
        memos: String,
    },
    RemovePath {
        path_id: String,
    },
    AddTodo {
        event_id: String,
        text: String,
    },
    ToggleTodo {
        event_id: String,
        todo_id: String,
    },
    RemoveTodo {
        event_id: String,
        todo_id: String,
    },
    SetTodoText {
        event_id: String,
        todo_id: String,
        text: String,
    },
    Settings {
        birth_date: String,
        current_age: u32,
        life_expectancy: u32,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    plan_dir: Option<String>,
    demo: bool,
    durable_writes: bool,
    log_level: Option<String>,
    command: CliCommand,
}

fn is_command_keyword(arg: &str) -> bool {
    matches!(
        arg,
        "add-event"
            | "update-event"
            | "remove-event"
            | "add-path"
            | "update-path"
            | "remove-path"
            | "todo"
            | "settings"
    )
}

fn parse_age(raw: &str) -> Result<u32, ()> {
    raw.parse().map_err(|_| ())
}

fn parse_command(
    keyword: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<CliCommand, ()> {
    match keyword {
        "add-event" => {
            let age = parse_age(&args.next().ok_or(())?)?;
            let title = args.next().ok_or(())?;
            let path_id = match args.next() {
                None => None,
                Some(flag) if flag == "--path" => Some(args.next().ok_or(())?),
                Some(_) => return Err(()),
            };
            Ok(CliCommand::AddEvent {
                age,
                title,
                path_id,
            })
        }
        "update-event" => {
            let event_id = args.next().ok_or(())?;
            let age = parse_age(&args.next().ok_or(())?)?;
            let title = args.next().ok_or(())?;
            Ok(CliCommand::UpdateEvent {
                event_id,
                age,
                title,
            })
        }
        "remove-event" => Ok(CliCommand::RemoveEvent {
            event_id: args.next().ok_or(())?,
        }),
        "add-path" => {
            let title = args.next().ok_or(())?;
            let memos = args.next().unwrap_or_default();
            Ok(CliCommand::AddPath { title, memos })
        }
        "update-path" => {
            let path_id = args.next().ok_or(())?;
            let title = args.next().ok_or(())?;
            let memos = args.next().unwrap_or_default();
            Ok(CliCommand::UpdatePath {
                path_id,
                title,
                memos,
            })
        }
        "remove-path" => Ok(CliCommand::RemovePath {
            path_id: args.next().ok_or(())?,
        }),
        "todo" => {
            let sub = args.next().ok_or(())?;
            match sub.as_str() {
                "add" => Ok(CliCommand::AddTodo {
                    event_id: args.next().ok_or(())?,
                    text: args.next().ok_or(())?,
                }),
                "toggle" => Ok(CliCommand::ToggleTodo {
                    event_id: args.next().ok_or(())?,
                    todo_id: args.next().ok_or(())?,
                }),
                "remove" => Ok(CliCommand::RemoveTodo {
                    event_id: args.next().ok_or(())?,
                    todo_id: args.next().ok_or(())?,
                }),
                "set-text" => Ok(CliCommand::SetTodoText {
                    event_id: args.next().ok_or(())?,
                    todo_id: args.next().ok_or(())?,
                    text: args.next().ok_or(())?,
                }),
                _ => Err(()),
            }
        }
        "settings" => {
            let birth_date = args.next().ok_or(())?;
            let current_age = parse_age(&args.next().ok_or(())?)?;
            let life_expectancy = parse_age(&args.next().ok_or(())?)?;
            Ok(CliCommand::Settings {
                birth_date,
                current_age,
                life_expectancy,
            })
        }
        _ => Err(()),
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--plan" => {
                if options.plan_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.plan_dir = Some(dir);
            }
            "--log-level" => {
                if options.log_level.is_some() {
                    return Err(());
                }
                let level = args.next().ok_or(())?;
                options.log_level = Some(level);
            }
            keyword if is_command_keyword(keyword) => {
                options.command = parse_command(keyword, &mut args)?;
                if args.next().is_some() {
                    return Err(());
                }
                break;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.plan_dir.is_some() {
                    return Err(());
                }
                options.plan_dir = Some(arg);
            }
        }
    }

    if options.demo && options.plan_dir.is_some() {
        return Err(());
    }

    Ok(options)
}

fn command_ops(command: &CliCommand) -> Result<Vec<Op>, Box<dyn Error>> {
    let ops = match command {
        CliCommand::Show => Vec::new(),
        CliCommand::AddEvent {
            age,
            title,
            path_id,
        } => {
            let path_id = match path_id {
                Some(raw) => Some(PathId::new(raw.clone())?),
                None => None,
            };
            vec![Op::Event(EventOp::Add {
                age: *age,
                title: title.clone(),
                path_id,
            })]
        }
        CliCommand::UpdateEvent {
            event_id,
            age,
            title,
        } => vec![Op::Event(EventOp::Update {
            event_id: EventId::new(event_id.clone())?,
            age: *age,
            title: title.clone(),
        })],
        CliCommand::RemoveEvent { event_id } => vec![Op::Event(EventOp::Remove {
            event_id: EventId::new(event_id.clone())?,
        })],
        CliCommand::AddPath { title, memos } => vec![Op::Path(PathOp::Add {
            title: title.clone(),
            memos: memos.clone(),
        })],
        CliCommand::UpdatePath {
            path_id,
            title,
            memos,
        } => vec![Op::Path(PathOp::Update {
            path_id: PathId::new(path_id.clone())?,
            title: title.clone(),
            memos: memos.clone(),
        })],
        CliCommand::RemovePath { path_id } => vec![Op::Path(PathOp::Remove {
            path_id: PathId::new(path_id.clone())?,
        })],
        CliCommand::AddTodo { event_id, text } => vec![Op::Todo(TodoOp::Add {
            event_id: EventId::new(event_id.clone())?,
            text: text.clone(),
        })],
        CliCommand::ToggleTodo { event_id, todo_id } => vec![Op::Todo(TodoOp::Toggle {
            event_id: EventId::new(event_id.clone())?,
            todo_id: TodoId::new(todo_id.clone())?,
        })],
        CliCommand::RemoveTodo { event_id, todo_id } => vec![Op::Todo(TodoOp::Remove {
            event_id: EventId::new(event_id.clone())?,
            todo_id: TodoId::new(todo_id.clone())?,
        })],
        CliCommand::SetTodoText {
            event_id,
            todo_id,
            text,
        } => vec![Op::Todo(TodoOp::SetText {
            event_id: EventId::new(event_id.clone())?,
            todo_id: TodoId::new(todo_id.clone())?,
            text: text.clone(),
        })],
        CliCommand::Settings {
            birth_date,
            current_age,
            life_expectancy,
        } => {
            let birth_date = birth_date.parse::<chrono::NaiveDate>()?;
            vec![Op::Settings {
                birth_date,
                current_age: *current_age,
                life_expectancy: *life_expectancy,
            }]
        }
    };

    Ok(ops)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "pavelife".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let level = options
            .log_level
            .clone()
            .unwrap_or_else(|| pavelife::logging::default_log_level().to_owned());
        pavelife::logging::init_logging(&level)?;

        let folder = if options.demo {
            None
        } else {
            let dir = options.plan_dir.clone().unwrap_or_else(|| ".".to_owned());
            let folder = if options.durable_writes {
                PlanFolder::new(dir).with_durability(WriteDurability::Durable)
            } else {
                PlanFolder::new(dir)
            };
            Some(folder)
        };

        let mut plan = match &folder {
            Some(folder) => folder.load_or_seed(),
            None => pavelife::model::seed_plan(),
        };

        let ops = command_ops(&options.command)?;
        if !ops.is_empty() {
            let mut ids = RandomIds;
            let result = apply_ops(&mut plan, &ops, &mut ids);
            for skipped in &result.skipped {
                eprintln!("{program}: skipped op #{}: {}", skipped.index, skipped.reason);
            }
            if result.applied > 0 {
                if let Some(folder) = &folder {
                    if let Err(err) = folder.save_plan(&plan) {
                        log::warn!("cannot persist plan: {err}");
                    }
                }
            }
            eprintln!(
                "{program}: applied {} op(s), skipped {}",
                result.applied,
                result.skipped.len()
            );
        }

        let layout = pavelife::layout::layout_timeline(&plan);
        let text = pavelife::render::render_timeline(&plan, &layout)?;
        println!("{text}");

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("pavelife: {err}");
        std::process::exit(1);
    }
}
