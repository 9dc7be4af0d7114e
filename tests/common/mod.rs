//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use folder2pdf::cli::{App, Prompter, Settings};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::Document;
use tempfile::TempDir;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Answer {
    Choice(&'static str),
    Path(String),
    Yes,
    No,
}

/// Prompter that replays a fixed list of answers and records every question.
///
/// Running out of answers, or getting an answer of the wrong kind, is an error
/// so a test fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub confirmations: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            confirmations: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, asking: &str) -> Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted while asking for {}", asking))
    }
}

impl Prompter for ScriptedPrompter {
    fn menu_choice(&mut self) -> Result<String> {
        match self.next("menu choice")? {
            Answer::Choice(c) => Ok(c.to_string()),
            other => Err(anyhow!("expected menu choice, script has {:?}", other)),
        }
    }

    fn folder_path(&mut self) -> Result<String> {
        match self.next("folder path")? {
            Answer::Path(p) => Ok(p),
            other => Err(anyhow!("expected folder path, script has {:?}", other)),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.confirmations.push(message.to_string());
        match self.next(message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => Err(anyhow!("expected y/n for '{}', script has {:?}", message, other)),
        }
    }
}

/// Scripted answer holding a folder path
pub fn path_answer(path: &Path) -> Answer {
    Answer::Path(path.display().to_string())
}

/// Workspace with an export directory and room for source folders
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        self.root.path().join("export")
    }

    /// Create an empty source folder named `name`
    pub fn folder(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// Build an `App` driven by `answers`, with all delays removed
    pub fn app(&self, answers: impl IntoIterator<Item = Answer>) -> App<ScriptedPrompter> {
        App::new(
            ScriptedPrompter::new(answers),
            Settings::instant(self.export_dir()),
        )
        .unwrap()
    }

    /// Names of all entries in the export directory, sorted
    pub fn exported(&self) -> Vec<String> {
        let dir = self.export_dir();
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Write a solid-color PNG of the given size
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 128]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Write a solid-color JPEG of the given size
pub fn write_jpg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([40, 200, 40]))
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Write a file that is not an image
pub fn write_text(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "not an image").unwrap();
    path
}

/// Media box widths of every page, in page order
pub fn page_widths(pdf: &Path) -> Vec<i64> {
    let doc = Document::load(pdf).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// Number of pages in a PDF
pub fn page_count(pdf: &Path) -> usize {
    Document::load(pdf).unwrap().get_pages().len()
}
