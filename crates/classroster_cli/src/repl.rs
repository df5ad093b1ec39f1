//! Interactive command loop over the roster facade.
//!
//! # Responsibility
//! - Parse numeric command selectors and collect prompted arguments.
//! - Translate facade outcomes into the operator message catalog.
//!
//! # Invariants
//! - Malformed input never terminates the loop; only command 8 or end of
//!   input does.
//! - A fault while handling one command is caught, logged, and reported;
//!   the loop then accepts the next command.

use classroster_core::{RosterError, RosterService};
use log::error;
use std::io::{self, BufRead, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};

const COMMAND_PROMPT: &str = "Enter a command (1: addClassroom, 2: listClassrooms, \
3: removeClassroom, 4: addStudent, 5: listStudents, 6: scheduleAssignment, \
7: submitAssignment, 8: exit):";

/// One operator command selected by its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateClassroom,
    ListClassrooms,
    RemoveClassroom,
    AddStudent,
    ListStudents,
    ScheduleAssignment,
    SubmitAssignment,
    Exit,
}

/// Selector line that could not be mapped to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The line was not an integer.
    NotANumber,
    /// The integer is outside the command table.
    UnknownCommand(i64),
}

/// Maps one input line to a command.
pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    let selector: i64 = line
        .trim()
        .parse()
        .map_err(|_| CommandParseError::NotANumber)?;
    match selector {
        1 => Ok(Command::CreateClassroom),
        2 => Ok(Command::ListClassrooms),
        3 => Ok(Command::RemoveClassroom),
        4 => Ok(Command::AddStudent),
        5 => Ok(Command::ListStudents),
        6 => Ok(Command::ScheduleAssignment),
        7 => Ok(Command::SubmitAssignment),
        8 => Ok(Command::Exit),
        other => Err(CommandParseError::UnknownCommand(other)),
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Runs the interactive loop until exit or end of input.
///
/// Written against `BufRead`/`Write` so tests can drive it with in-memory
/// buffers. All roster state lives for the duration of this call and is
/// discarded on return.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut roster = RosterService::new();

    writeln!(output, "Welcome to the Virtual Classroom Manager!")?;
    loop {
        writeln!(output, "{COMMAND_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(output, "Exiting...")?;
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandParseError::NotANumber) => {
                error!("event=command_parse module=cli status=not_a_number");
                writeln!(output, "Invalid input: please enter a number.")?;
                continue;
            }
            Err(CommandParseError::UnknownCommand(selector)) => {
                error!("event=command_parse module=cli status=unknown selector={selector}");
                writeln!(output, "Invalid command.")?;
                continue;
            }
        };

        // Faults inside one command must not take the session down.
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            handle_command(command, &mut roster, &mut input, &mut output)
        }));
        match outcome {
            Ok(Ok(Flow::Continue)) => {}
            Ok(Ok(Flow::Exit)) => break,
            Ok(Err(err)) => return Err(err),
            Err(_) => {
                error!("event=command_handle module=cli status=panic");
                writeln!(output, "An error occurred: command failed unexpectedly.")?;
            }
        }
    }

    output.flush()
}

fn handle_command<R: BufRead, W: Write>(
    command: Command,
    roster: &mut RosterService,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    match command {
        Command::CreateClassroom => {
            let Some(name) = prompt(input, output, "Enter classroom name:")? else {
                return Ok(Flow::Exit);
            };
            match roster.create_classroom(&name) {
                Ok(()) => writeln!(output, "Classroom {name} has been created.")?,
                Err(err) => report(output, &err)?,
            }
        }
        Command::ListClassrooms => {
            let names = roster.classroom_names();
            if names.is_empty() {
                writeln!(output, "No classrooms available.")?;
            } else {
                writeln!(output, "Classrooms:")?;
                for name in names {
                    writeln!(output, "{name}")?;
                }
            }
        }
        Command::RemoveClassroom => {
            let Some(name) = prompt(input, output, "Enter classroom name to remove:")? else {
                return Ok(Flow::Exit);
            };
            match roster.remove_classroom(&name) {
                Ok(()) => writeln!(output, "Classroom {name} has been removed.")?,
                Err(err) => report(output, &err)?,
            }
        }
        Command::AddStudent => {
            let Some(id) = prompt(input, output, "Enter student ID:")? else {
                return Ok(Flow::Exit);
            };
            let Some(name) = prompt(input, output, "Enter classroom name:")? else {
                return Ok(Flow::Exit);
            };
            match roster.enroll_student(&id, &name) {
                Ok(()) => writeln!(output, "Student {id} has been enrolled in {name}.")?,
                Err(err) => report(output, &err)?,
            }
        }
        Command::ListStudents => {
            let Some(name) = prompt(input, output, "Enter classroom name to list students:")?
            else {
                return Ok(Flow::Exit);
            };
            match roster.students_in(&name) {
                Ok(ids) if ids.is_empty() => {
                    writeln!(output, "No students enrolled in {name}.")?;
                }
                Ok(ids) => {
                    writeln!(output, "Students in {name}:")?;
                    for id in ids {
                        writeln!(output, "{id}")?;
                    }
                }
                Err(err) => report(output, &err)?,
            }
        }
        Command::ScheduleAssignment => {
            let Some(name) = prompt(input, output, "Enter classroom name:")? else {
                return Ok(Flow::Exit);
            };
            let Some(details) = prompt(input, output, "Enter assignment details:")? else {
                return Ok(Flow::Exit);
            };
            match roster.schedule_assignment(&name, &details) {
                Ok(()) => writeln!(output, "Assignment for {name} has been scheduled.")?,
                Err(err) => report(output, &err)?,
            }
        }
        Command::SubmitAssignment => {
            let Some(id) = prompt(input, output, "Enter student ID:")? else {
                return Ok(Flow::Exit);
            };
            let Some(name) = prompt(input, output, "Enter classroom name:")? else {
                return Ok(Flow::Exit);
            };
            let Some(details) = prompt(input, output, "Enter assignment details:")? else {
                return Ok(Flow::Exit);
            };
            match roster.submit_assignment(&id, &name, &details) {
                Ok(()) => {
                    writeln!(output, "Assignment submitted by Student {id} in {name}.")?;
                }
                Err(err) => report(output, &err)?,
            }
        }
        Command::Exit => {
            writeln!(output, "Exiting...")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

/// Maps soft facade failures to the operator message catalog.
fn report<W: Write>(output: &mut W, err: &RosterError) -> io::Result<()> {
    match err {
        RosterError::ClassroomExists(name) => {
            writeln!(output, "Classroom {name} already exists.")
        }
        RosterError::ClassroomNotFound(name) => {
            writeln!(output, "Classroom {name} does not exist.")
        }
        RosterError::StudentNotFound(id) => writeln!(output, "Student {id} does not exist."),
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{message}")?;
    output.flush()?;
    read_line(input)
}

/// Reads one line, stripping the trailing newline. `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
