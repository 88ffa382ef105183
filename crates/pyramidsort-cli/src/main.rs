use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pyramidsort_config::Config;
use pyramidsort_engine::{LINE_SEP, LineRange, io, reorder, reorder_line_range};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Read, stdout},
    path::{Path, PathBuf},
    process,
};

struct CliArgs {
    file: Option<PathBuf>,
    /// `--write` / `--print` override; `None` falls back to the config.
    write: Option<bool>,
    lines: Option<LineRange>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("With no FILE, reads stdin and writes the reordered text to stdout.");
    eprintln!("With FILE and no options, opens the interactive editor.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -w, --write          reorder FILE in place");
    eprintln!("  -p, --print          reorder FILE and print to stdout");
    eprintln!("      --lines N:M      only reorder lines N through M (1-based, inclusive)");
    eprintln!("  -h, --help           show this help");
}

fn parse_line_spec(spec: &str) -> Option<LineRange> {
    let (start, end) = spec.split_once(':')?;
    let start: usize = start.parse().ok()?;
    let end: usize = end.parse().ok()?;
    if start == 0 || end < start {
        return None;
    }
    // 1-based inclusive on the command line, zero-based exclusive internally
    Some(LineRange::new(start - 1, end))
}

fn parse_args() -> CliArgs {
    let mut raw = env::args();
    let program = raw.next().unwrap_or_else(|| "pyramidsort".to_string());

    let mut parsed = CliArgs {
        file: None,
        write: None,
        lines: None,
    };

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "-w" | "--write" => parsed.write = Some(true),
            "-p" | "--print" => parsed.write = Some(false),
            "--lines" => {
                let Some(spec) = raw.next() else {
                    eprintln!("Error: --lines needs a range argument like 3:10");
                    print_usage(&program);
                    process::exit(1);
                };
                match parse_line_spec(&spec) {
                    Some(range) => parsed.lines = Some(range),
                    None => {
                        eprintln!("Error: invalid line range '{spec}'");
                        print_usage(&program);
                        process::exit(1);
                    }
                }
            }
            "-h" | "--help" => {
                print_usage(&program);
                process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: unknown option '{arg}'");
                print_usage(&program);
                process::exit(1);
            }
            _ => {
                if parsed.file.is_some() {
                    eprintln!("Error: more than one input file");
                    print_usage(&program);
                    process::exit(1);
                }
                parsed.file = Some(PathBuf::from(arg));
            }
        }
    }

    parsed
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();
    let config = load_config();

    let Some(path) = args.file.clone() else {
        if args.write == Some(true) || args.lines.is_some() {
            eprintln!("Error: --write and --lines need an input file");
            process::exit(1);
        }
        return run_filter();
    };

    if args.write.is_some() || args.lines.is_some() {
        return run_batch(&path, &args, &config);
    }

    run_editor(path, &config)
}

/// stdin → stdout, the whole input as one selection.
fn run_filter() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    print!("{}", reorder(&input));
    Ok(())
}

/// Non-interactive mode over a file, whole or a line range.
fn run_batch(path: &Path, args: &CliArgs, config: &Config) -> Result<()> {
    let content = io::read_file(path)?;
    let result = match &args.lines {
        Some(range) => reorder_line_range(&content, range),
        None => reorder(&content),
    };

    if args.write.unwrap_or(config.write_in_place) {
        io::write_file(path, &result)?;
    } else {
        print!("{result}");
    }
    Ok(())
}

struct App {
    path: PathBuf,
    lines: Vec<String>,
    ends_with_sep: bool,
    cursor: usize,
    anchor: Option<usize>,
    dirty: bool,
    status: String,
    show_line_numbers: bool,
    list_state: ListState,
}

impl App {
    fn new(path: PathBuf, config: &Config) -> Result<Self> {
        let content = io::read_file(&path)?;
        let ends_with_sep = content.ends_with(LINE_SEP);
        let mut lines: Vec<String> = content.split(LINE_SEP).map(str::to_string).collect();
        if ends_with_sep {
            lines.pop();
        }

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Ok(Self {
            path,
            lines,
            ends_with_sep,
            cursor: 0,
            anchor: None,
            dirty: false,
            status: "v: start selection, Enter: build pyramid".to_string(),
            show_line_numbers: config.show_line_numbers,
            list_state,
        })
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.lines.len() {
            self.cursor += 1;
        }
        self.list_state.select(Some(self.cursor));
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.list_state.select(Some(self.cursor));
    }

    fn toggle_anchor(&mut self) {
        match self.anchor {
            Some(_) => {
                self.anchor = None;
                self.status = "Selection cleared".to_string();
            }
            None => {
                self.anchor = Some(self.cursor);
                self.status = "Selecting; Enter builds the pyramid".to_string();
            }
        }
    }

    fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        let start = anchor.min(self.cursor);
        let end = anchor.max(self.cursor) + 1;
        Some((start, end))
    }

    /// Reads the selection, reorders it, and replaces the selected lines
    /// with the result. Without a selection this is a no-op.
    fn build_pyramid(&mut self) {
        let Some((start, end)) = self.selection() else {
            self.status = "No selection; press v first".to_string();
            return;
        };

        let selected = self.lines[start..end].join(LINE_SEP);
        let reordered = reorder(&selected);
        let replacement: Vec<String> = reordered.split(LINE_SEP).map(str::to_string).collect();

        self.lines.splice(start..end, replacement);
        self.anchor = None;
        self.dirty = true;
        self.cursor = self.cursor.min(self.lines.len().saturating_sub(1));
        self.list_state.select(Some(self.cursor));
        self.status = "Pyramid built".to_string();
    }

    fn save(&mut self) {
        let mut content = self.lines.join(LINE_SEP);
        if self.ends_with_sep {
            content.push_str(LINE_SEP);
        }
        match io::write_file(&self.path, &content) {
            Ok(()) => {
                self.dirty = false;
                self.status = format!("Saved {}", self.path.display());
            }
            Err(e) => {
                self.status = format!("Error saving: {e}");
            }
        }
    }
}

fn run_editor(path: PathBuf, config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(path, config);

    let res = match app {
        Ok(mut app) => run_app(&mut terminal, &mut app),
        Err(e) => Err(e.into()),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Char('v') => app.toggle_anchor(),
                KeyCode::Esc => {
                    app.anchor = None;
                    app.status = "Selection cleared".to_string();
                }
                KeyCode::Enter => app.build_pyramid(),
                KeyCode::Char('w') => app.save(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let selection = app.selection();
    let gutter_width = app.lines.len().to_string().len();

    let items: Vec<ListItem> = app
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let in_selection = selection.is_some_and(|(start, end)| i >= start && i < end);
            let text = if app.show_line_numbers {
                format!("{:>gutter_width$} {}", i + 1, line)
            } else {
                line.clone()
            };
            let style = if in_selection {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(vec![Line::from(vec![Span::raw(text)])]).style(style)
        })
        .collect();

    let title = if app.dirty {
        format!("{} [+]", app.path.display())
    } else {
        app.path.display().to_string()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("v: Select | "),
        Span::raw("Enter: Build pyramid | "),
        Span::raw("w: Save"),
    ]);

    let status = Paragraph::new(vec![Line::from(Span::raw(app.status.clone())), help])
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, chunks[1]);
}
