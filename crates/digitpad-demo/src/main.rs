//! Terminal showcase: two entry fields driven by keyboard, mouse, and
//! scroll-wheel "rotary" input.
//!
//! Keys: Tab switches fields, Enter opens/commits, Esc cancels, `q` quits
//! while no entry screen is open. The mouse taps keys on the pad; the
//! scroll wheel feeds the numeric field's rotary accumulator.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CtEvent, KeyCode as CtKeyCode,
    KeyEventKind as CtKeyEventKind, MouseButton, MouseEventKind,
};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode, size,
};
use crossterm::{execute, queue};
use digitpad::prelude::*;
use digitpad::{Bounds, Cell, PackedRgba, StyleFlags};

const TICK: Duration = Duration::from_millis(33);

/// Wheel notches are coarser than a hardware dial; a third of a detent
/// per notch makes the accumulator's thresholding visible.
const WHEEL_DETENT_FRACTION: f64 = 1.0 / 3.0;

fn main() -> Result<()> {
    let mut out = stdout();
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide, EnableMouseCapture)?;
    let result = run(&mut out);
    execute!(out, DisableMouseCapture, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(out: &mut Stdout) -> Result<()> {
    let locale = Locale::new(system_locale_tag());
    let mut fields = [
        EntryField::text(KeypadMode::Decimal)
            .with_locale(&locale)
            .with_placeholder("Amount"),
        EntryField::number()
            .with_bounds(Bounds::new(0, 100))
            .with_number(50)
            .with_placeholder("Volume"),
    ];
    let mut focus = 0usize;

    let (mut width, mut height) = size()?;
    let mut buf = Buffer::new(width, height);

    loop {
        let frame = Rect::from_size(width, height);
        let open = fields.iter().position(EntryField::is_open);

        buf.clear();
        match open {
            Some(i) => fields[i].render(frame, &mut buf),
            None => render_home(&fields, focus, frame, &mut buf),
        }
        present(out, &buf)?;

        let ev = if event::poll(TICK)? {
            match translate(event::read()?) {
                Translated::Input(ev) => ev,
                Translated::Resize(w, h) => {
                    width = w;
                    height = h;
                    buf.resize(width, height);
                    continue;
                }
                Translated::Quit if open.is_none() => return Ok(()),
                _ => continue,
            }
        } else {
            Event::Tick(TICK)
        };

        match open {
            Some(i) => {
                let _ = fields[i].handle_event(frame, &ev);
            }
            None => {
                if let Event::Key(key) = &ev
                    && key.is_char('\t')
                {
                    focus = (focus + 1) % fields.len();
                    continue;
                }
                let _ = fields[focus].handle_event(field_rect(frame, focus), &ev);
            }
        }
    }
}

enum Translated {
    Input(Event),
    Resize(u16, u16),
    Quit,
    Ignored,
}

fn translate(ev: CtEvent) -> Translated {
    match ev {
        CtEvent::Key(key) if key.kind != CtKeyEventKind::Release => {
            let code = match key.code {
                CtKeyCode::Char('q') => return Translated::Quit,
                CtKeyCode::Char(c) => KeyCode::Char(c),
                CtKeyCode::Tab => KeyCode::Char('\t'),
                CtKeyCode::Backspace => KeyCode::Backspace,
                CtKeyCode::Enter => KeyCode::Enter,
                CtKeyCode::Esc => KeyCode::Escape,
                CtKeyCode::Up => KeyCode::Up,
                CtKeyCode::Down => KeyCode::Down,
                _ => return Translated::Ignored,
            };
            Translated::Input(Event::Key(KeyEvent::new(code)))
        }
        CtEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Translated::Input(Event::Pointer(
                digitpad::PointerEvent::down(mouse.column, mouse.row),
            )),
            MouseEventKind::Up(MouseButton::Left) => Translated::Input(Event::Pointer(
                digitpad::PointerEvent::up(mouse.column, mouse.row),
            )),
            MouseEventKind::ScrollUp => {
                Translated::Input(Event::Rotary(RotaryEvent::Delta(WHEEL_DETENT_FRACTION)))
            }
            MouseEventKind::ScrollDown => {
                Translated::Input(Event::Rotary(RotaryEvent::Delta(-WHEEL_DETENT_FRACTION)))
            }
            _ => Translated::Ignored,
        },
        CtEvent::Resize(w, h) => Translated::Resize(w, h),
        _ => Translated::Ignored,
    }
}

fn field_rect(frame: Rect, index: usize) -> Rect {
    let width = frame.width.saturating_sub(4).min(28);
    Rect::new(2, 2 + index as u16 * 4, width, 3)
}

fn render_home(fields: &[EntryField; 2], focus: usize, frame: Rect, buf: &mut Buffer) {
    draw_line(buf, 2, 0, "digitpad demo", Style::new().bold());
    for (i, field) in fields.iter().enumerate() {
        let rect = field_rect(frame, i);
        field.render(rect, buf);
        if i == focus {
            draw_line(buf, rect.right() + 1, rect.y + rect.height / 2, "◀", Style::new());
        }
    }
    let hint_y = frame.height.saturating_sub(1);
    draw_line(
        buf,
        2,
        hint_y,
        "tab: focus  enter: edit  q: quit",
        Style::new().dim(),
    );
}

fn draw_line(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let mut x = x;
    for ch in text.chars() {
        if let Some(cell) = buf.get_mut(x, y) {
            cell.ch = ch;
            if let Some(fg) = style.fg {
                cell.fg = fg;
            }
            if let Some(attrs) = style.attrs {
                cell.attrs |= attrs;
            }
        }
        x = x.saturating_add(1);
    }
}

fn present(out: &mut Stdout, buf: &Buffer) -> Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (y, row) in buf.rows().enumerate() {
        queue!(out, MoveTo(0, y as u16))?;
        for cell in row {
            queue!(out, SetAttribute(Attribute::Reset))?;
            match color_of(cell.fg) {
                Some(color) => queue!(out, SetForegroundColor(color))?,
                None => queue!(out, ResetColor)?,
            }
            if let Some(color) = color_of(cell.bg) {
                queue!(out, SetBackgroundColor(color))?;
            }
            for attr in attrs_of(cell) {
                queue!(out, SetAttribute(attr))?;
            }
            queue!(out, Print(cell.ch))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Map a packed color to a terminal color, blending alpha onto black.
fn color_of(color: PackedRgba) -> Option<Color> {
    if color.is_transparent() {
        return None;
    }
    let a = u16::from(color.a());
    let scale = |c: u8| (u16::from(c) * a / 255) as u8;
    Some(Color::Rgb {
        r: scale(color.r()),
        g: scale(color.g()),
        b: scale(color.b()),
    })
}

fn attrs_of(cell: &Cell) -> Vec<Attribute> {
    let mut attrs = Vec::new();
    if cell.attrs.contains(StyleFlags::BOLD) {
        attrs.push(Attribute::Bold);
    }
    if cell.attrs.contains(StyleFlags::DIM) {
        attrs.push(Attribute::Dim);
    }
    if cell.attrs.contains(StyleFlags::UNDERLINE) {
        attrs.push(Attribute::Underlined);
    }
    if cell.attrs.contains(StyleFlags::REVERSE) {
        attrs.push(Attribute::Reverse);
    }
    attrs
}

fn system_locale_tag() -> String {
    std::env::var("LC_NUMERIC")
        .or_else(|_| std::env::var("LANG"))
        .ok()
        .and_then(|v| v.split('.').next().map(str::to_owned))
        .filter(|v| !v.is_empty() && v != "C" && v != "POSIX")
        .unwrap_or_else(|| "en-US".to_owned())
}
