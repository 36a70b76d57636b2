//! The interactive terminal view.
//!
//! Draws the evolution with x-coordinate 0 centered, one terminal row
//! per generation. Every key that changes the configuration re-seeds
//! the world and redraws the whole picture from generation 0.

use automata_lib::{Seed, Status, World, ALIVE};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{read, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::{
    error::Error,
    io::{stdout, Stdout, Write},
};

const HELP: &str = "[<-/->] rule  [c] center  [r] random  [space] reseed  [q] quit";

/// Runs the interactive view until the user quits.
pub(crate) fn explore(mut world: World) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = event_loop(&mut world, &mut stdout);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn event_loop(world: &mut World, stdout: &mut Stdout) -> Result<(), Box<dyn Error>> {
    draw(world, stdout)?;
    loop {
        match read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Left => {
                    world.previous_rule();
                    draw(world, stdout)?;
                }
                KeyCode::Right => {
                    world.next_rule();
                    draw(world, stdout)?;
                }
                KeyCode::Char('c') => {
                    world.set_seed(Seed::Center);
                    draw(world, stdout)?;
                }
                KeyCode::Char('r') => {
                    world.set_seed(Seed::Random);
                    draw(world, stdout)?;
                }
                KeyCode::Char(' ') => {
                    world.reset();
                    draw(world, stdout)?;
                }
                _ => {}
            },
            Event::Resize(..) => draw(world, stdout)?,
            _ => {}
        }
    }
    Ok(())
}

/// Redraws the whole evolution from generation 0.
///
/// The top bar shows the effective configuration; the bottom bar shows
/// the key bindings. Each remaining terminal row is one generation,
/// with x-coordinate 0 at the middle column, clipped to the terminal
/// like the widget's canvas.
fn draw(world: &mut World, stdout: &mut Stdout) -> Result<(), Box<dyn Error>> {
    let (cols, rows) = size()?;
    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!(
            "Rule: {}  Seed: {}  World: {}x{}",
            world.rule(),
            world.seed(),
            world.width(),
            world.height(),
        ))
    )?;

    world.reset();
    let view_rows = rows.saturating_sub(2);
    let mut status = Status::Evolving;
    for row in 0..view_rows {
        let line: String = (0..cols)
            .map(|col| {
                let x = col as i32 - cols as i32 / 2;
                if world.get_cell_state(x) == ALIVE {
                    'o'
                } else {
                    ' '
                }
            })
            .collect();
        queue!(stdout, MoveTo(0, row + 1), Print(line))?;
        if status == Status::Done {
            break;
        }
        status = world.run(Some(1));
    }

    if rows > 0 {
        queue!(stdout, MoveTo(0, rows - 1), Print(HELP))?;
    }
    stdout.flush()?;
    Ok(())
}
