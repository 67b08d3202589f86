// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The synchronous event loop and renderer. Single threaded by design: each
//! redraw blocks on [`crossterm::event::read`], and conversions were computed
//! once before the loop started, so no work happens between keypresses.

use std::io::{self, Write};

use crossterm::{cursor::MoveTo,
                event::{Event, KeyCode, KeyEventKind, KeyModifiers, read},
                queue,
                style::{Color, Print, ResetColor, SetBackgroundColor},
                terminal::{Clear, ClearType}};

use crate::{raw_mode::RawModeGuard,
            report::{ConversionReport, to_rgb8}};

const COL_ORIGIN: u16 = 4;
const ROW_ORIGIN: u16 = 2;
const HELP_TEXT: &str = "Press any key to redraw; q, Esc, or Ctrl+C to quit.";

/// Take over the screen and display `report` until the user quits.
///
/// # Errors
///
/// Any terminal I/O failure.
pub fn run(report: &ConversionReport) -> io::Result<()> {
    let _raw_mode_guard = RawModeGuard::try_new()?;
    let mut out = io::stdout();

    loop {
        render(&mut out, report)?;
        match read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c')
                        if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        break;
                    }
                    // In the reference behavior keyboard input merely
                    // triggers a redraw.
                    _ => {}
                }
            }
            // Resize, focus, release events: redraw as well.
            _ => {}
        }
    }

    Ok(())
}

fn render(out: &mut impl Write, report: &ConversionReport) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let rows: [(&str, String, Option<(u8, u8, u8)>); 9] = [
        ("rgb", report.rgb.to_string(), Some(to_rgb8(&report.rgb))),
        ("xyz", report.xyz.to_string(), None),
        ("back", report.round_trip.to_string(), Some(to_rgb8(&report.round_trip))),
        ("lab", report.lab.to_string(), None),
        ("luv", report.luv.to_string(), None),
        ("hsv", report.hsv.to_string(), None),
        ("hls", report.hls.to_string(), None),
        ("gray", report.grayscale.to_string(), Some(to_rgb8(&report.grayscale))),
        ("sum", report.sum.to_string(), Some(to_rgb8(&report.sum))),
    ];

    for (offset, (label, text, maybe_swatch)) in rows.iter().enumerate() {
        queue!(out, MoveTo(COL_ORIGIN, ROW_ORIGIN + offset as u16))?;
        match maybe_swatch {
            Some((red, green, blue)) => queue!(
                out,
                SetBackgroundColor(Color::Rgb {
                    r: *red,
                    g: *green,
                    b: *blue
                }),
                Print("  "),
                ResetColor
            )?,
            None => queue!(out, Print("  "))?,
        }
        queue!(out, Print(format!(" {label:<5} {text}")))?;
    }

    let strip_row = ROW_ORIGIN + rows.len() as u16 + 1;
    queue!(out, MoveTo(COL_ORIGIN, strip_row))?;
    for step in &report.gradient {
        let (red, green, blue) = to_rgb8(step);
        queue!(
            out,
            SetBackgroundColor(Color::Rgb {
                r: red,
                g: green,
                b: blue
            }),
            Print(" ")
        )?;
    }
    queue!(out, ResetColor)?;

    queue!(out, MoveTo(COL_ORIGIN, strip_row + 2), Print(HELP_TEXT))?;

    out.flush()
}
