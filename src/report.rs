// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Result;
use crate::models::{SdkVariant, Width};
use comfy_table::{Cell, CellAlignment, Color, Table};
use std::io::{self, Write};

const PLAIN_HEADER: &str = " # Version  Compiler       Type    Location";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width columns
    #[default]
    Plain,
    /// Bordered table including each variant's root directory
    Table,
    /// JSON array
    Json,
}

pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn print(&self, variants: &[SdkVariant]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write(&mut handle, variants)?;
        handle.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, writer: &mut W, variants: &[SdkVariant]) -> Result<()> {
        match self.format {
            ReportFormat::Plain => write_plain(writer, variants)?,
            ReportFormat::Table => writeln!(writer, "{}", build_table(variants))?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, variants)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportFormat::default())
    }
}

fn write_plain<W: Write>(writer: &mut W, variants: &[SdkVariant]) -> io::Result<()> {
    writeln!(writer, "{PLAIN_HEADER}")?;

    for (index, variant) in variants.iter().enumerate() {
        writeln!(
            writer,
            "{:>2} {:<8} {:<14} {}-bits {}",
            index + 1,
            variant.version(),
            variant.compiler(),
            variant.width(),
            variant.location().display()
        )?;
    }

    Ok(())
}

fn build_table(variants: &[SdkVariant]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Version"),
        Cell::new("Compiler"),
        Cell::new("Type"),
        Cell::new("Location"),
        Cell::new("Root"),
    ]);

    for (index, variant) in variants.iter().enumerate() {
        let width = variant.width();
        let width_cell = Cell::new(format!("{width}-bits"));
        let width_cell = match width {
            Width::Bits64 => width_cell.fg(Color::Green),
            Width::Bits32 => width_cell.fg(Color::Yellow),
            Width::Unknown => width_cell.fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(variant.version()),
            Cell::new(variant.compiler()),
            width_cell,
            Cell::new(variant.location().display()),
            Cell::new(variant.root().display()),
        ]);
    }

    table
}
