//! Terminal gallery demo.
//!
//! Lays out a set of "photos" of assorted aspect ratios and lays them out
//! again as the terminal is resized. One terminal cell stands for
//! `CELL_WIDTH × CELL_HEIGHT` pixels.
//!
//! ```text
//! cargo run -- "container: #gallery; items-per-row: 3; space: 16px"
//! SIMPLERY_LOG=gallery.log cargo run
//! ```
//!
//! Press `q` or `Esc` to quit.

use std::io::{self, Write};

use crossterm::event::{Event, EventStream, KeyCode};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use futures::StreamExt;
use simplery::log::LevelFilter;
use simplery::testing::{ElementId, ItemShape, TestDocument};
use simplery::{Gallery, GalleryHost, LayoutResult, Options, ResizeController, init_logger};

const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;
const DEFAULT_OPTIONS: &str = "container: #gallery; items-per-row: 4; space: 8px";
const RATIOS: [f64; 14] = [
    0.75, 1.5, 1.0, 0.6, 1.25, 0.8, 1.33, 0.5, 1.0, 0.9, 1.6, 0.7, 1.1, 0.66,
];

/// A box in terminal cells.
#[derive(Debug, Clone, Copy)]
struct CellRect {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl CellRect {
    fn from_px(left: f64, top: f64, width: f64, height: f64) -> Self {
        let cells = |px: f64, cell: f64| (px / cell).round().max(0.0) as u16;
        Self {
            x: cells(left, CELL_WIDTH),
            y: cells(top, CELL_HEIGHT),
            width: cells(width, CELL_WIDTH),
            height: cells(height, CELL_HEIGHT),
        }
    }
}

#[tokio::main]
async fn main() -> simplery::Result<()> {
    if let Ok(path) = std::env::var("SIMPLERY_LOG") {
        init_logger(path, LevelFilter::Debug)?;
    }

    let declarations = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OPTIONS.to_string());
    let options = Options::from_declarations(&declarations)?;

    let (cols, rows) = terminal::size()?;
    let mut doc = TestDocument::new(cols as f64 * CELL_WIDTH, rows as f64 * CELL_HEIGHT);
    doc.add_container("gallery", None);
    for ratio in RATIOS {
        doc.add_item(ItemShape::AspectRatio(ratio));
    }

    let mut gallery = Gallery::create(&options, &mut doc)?;
    let mut controller = ResizeController::new(gallery.config().resize_delay);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut gallery, &mut doc, &mut controller, &mut stdout).await;

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

async fn run(
    gallery: &mut Gallery<ElementId>,
    doc: &mut TestDocument,
    controller: &mut ResizeController,
    stdout: &mut io::Stdout,
) -> simplery::Result<()> {
    let mut events = EventStream::new();
    draw(stdout, doc, gallery.items(), gallery.last_layout())?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key)))
                        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) =>
                    {
                        break;
                    }
                    Some(Ok(Event::Resize(cols, rows))) => {
                        doc.set_viewport(cols as f64 * CELL_WIDTH, rows as f64 * CELL_HEIGHT);
                        controller.notify();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            Some(_) = controller.next() => {
                gallery.on_resize(doc);
                draw(stdout, doc, gallery.items(), gallery.last_layout())?;
            }
        }
    }

    Ok(())
}

fn draw(
    out: &mut impl Write,
    doc: &TestDocument,
    items: &[ElementId],
    layout: &LayoutResult,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    queue!(out, terminal::Clear(terminal::ClearType::All))?;

    for placement in &layout.placements {
        let padding = placement.padding;
        let px = |length: simplery::gcss::Length| length.as_px().unwrap_or(0.0);
        let height = doc.offset_height(items[placement.index]);

        // Draw the content box so gutters stay visible.
        let rect = CellRect::from_px(
            placement.left + px(padding.left),
            placement.top + px(padding.top),
            placement.width - px(padding.left) - px(padding.right),
            height - px(padding.top) - px(padding.bottom),
        );
        draw_box(out, rect, (cols, rows), &format!("#{}", placement.index))?;
    }

    let status = format!(
        " {} items · item width {}px · height {}px · q to quit ",
        layout.placements.len(),
        layout.item_width,
        layout.height
    );
    let status: String = status.chars().take(cols as usize).collect();
    queue!(out, cursor::MoveTo(0, rows.saturating_sub(1)), Print(status))?;
    out.flush()
}

fn draw_box(
    out: &mut impl Write,
    rect: CellRect,
    bounds: (u16, u16),
    label: &str,
) -> io::Result<()> {
    let (cols, rows) = bounds;
    if rect.width < 2 || rect.height < 2 || rect.x >= cols {
        return Ok(());
    }
    let visible = (cols - rect.x) as usize;
    let last_x = rect.width - 1;
    let last_y = rect.height - 1;

    for dy in 0..rect.height {
        let y = rect.y.saturating_add(dy);
        if y >= rows.saturating_sub(1) {
            break; // Status line
        }
        let line: String = (0..rect.width)
            .map(|dx| match (dx, dy) {
                (0, 0) => '┌',
                (x, 0) if x == last_x => '┐',
                (0, y) if y == last_y => '└',
                (x, y) if x == last_x && y == last_y => '┘',
                (_, 0) => '─',
                (_, y) if y == last_y => '─',
                (0, _) => '│',
                (x, _) if x == last_x => '│',
                _ => ' ',
            })
            .take(visible)
            .collect();
        queue!(out, cursor::MoveTo(rect.x, y), Print(line))?;
    }

    if rect.height > 2 && rect.width > 2 {
        let label: String = label
            .chars()
            .take((rect.width - 2) as usize)
            .take(visible.saturating_sub(1))
            .collect();
        let y = rect.y.saturating_add(1);
        if y < rows.saturating_sub(1) {
            queue!(out, cursor::MoveTo(rect.x + 1, y), Print(label))?;
        }
    }
    Ok(())
}
