use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::{
    self, detect_and_sort, join_tokens, split_tokens, DataKind, SortAlgorithm, ValueKind,
    DEFAULT_OUTPUT_FILE, GENERATION_SIZES,
};

// ---------------------------------------------------------------------------
// Persisted settings
// ---------------------------------------------------------------------------

/// User selections that survive a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Contents of the file path field.
    pub file_path: String,
    pub kind: DataKind,
    /// Number of tokens to generate.
    pub size: usize,
    pub algorithm: SortAlgorithm,
    /// Where "sort and save" writes.
    pub output_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            kind: DataKind::default(),
            size: GENERATION_SIZES[0],
            algorithm: SortAlgorithm::default(),
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// A message the shell shows in a modal window until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::Info(_) => "Success",
            Notification::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Info(m) | Notification::Error(m) => m,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    pub settings: Settings,

    /// Text of the editable display area; the current dataset.
    pub display_text: String,

    /// Type detected by the last sort, cleared when the dataset is replaced.
    /// Shown next to the status line.
    pub last_kind: Option<ValueKind>,

    /// Pending modal message.
    pub notification: Option<Notification>,

    /// One-line status shown next to the sort controls.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Load the file named in the path field. An empty field does nothing.
    pub fn load_from_path(&mut self) {
        let path = self.settings.file_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        self.load(Path::new(&path));
    }

    /// Load a file picked in a dialog, remembering it in the path field.
    pub fn load_path(&mut self, path: PathBuf) {
        self.settings.file_path = path.display().to_string();
        self.load(&path);
    }

    fn load(&mut self, path: &Path) {
        match data::load_file(path) {
            Ok(tokens) => {
                self.replace_dataset(&tokens);
                self.status_message = Some(format!("Loaded {} lines", tokens.len()));
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.notification = Some(Notification::Error(format!("Could not load data: {e}")));
            }
        }
    }

    /// Replace the dataset with freshly generated tokens.
    pub fn generate(&mut self) {
        let Settings { kind, size, .. } = self.settings;
        let tokens = data::generate(kind, size);
        log::info!("Generated {size} {kind} tokens");
        self.replace_dataset(&tokens);
        self.status_message = Some(format!("Generated {size} {kind} values"));
    }

    /// Sort the display text, show the result and write it to the output
    /// path. Empty text does nothing.
    pub fn sort_and_save(&mut self) {
        if self.display_text.is_empty() {
            return;
        }

        let tokens = split_tokens(&self.display_text);
        let sorted = detect_and_sort(&tokens, self.settings.algorithm);
        log::info!(
            "Sorted {} tokens as {} using {}",
            sorted.len(),
            sorted.kind(),
            self.settings.algorithm
        );

        self.display_text = join_tokens(&sorted.render());
        self.last_kind = Some(sorted.kind());
        self.status_message = Some(format!("Sorted {} values", sorted.len()));

        let output = self.output_path();
        self.notification = Some(match data::save_file(&sorted, &output) {
            Ok(()) => Notification::Info(format!("Data saved to {}.", output.display())),
            Err(e) => {
                log::error!("Failed to save sorted data: {e}");
                Notification::Error(format!("Could not save data: {e}"))
            }
        });
    }

    /// Label naming the type the last sort detected.
    pub fn detected_label(&self) -> Option<String> {
        self.last_kind.map(|kind| format!("Detected: {kind}"))
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Output path, falling back to the default file name when blank.
    pub fn output_path(&self) -> PathBuf {
        let trimmed = self.settings.output_path.trim();
        if trimmed.is_empty() {
            PathBuf::from(DEFAULT_OUTPUT_FILE)
        } else {
            PathBuf::from(trimmed)
        }
    }

    fn replace_dataset(&mut self, tokens: &[String]) {
        self.display_text = join_tokens(tokens);
        self.last_kind = None;
    }
}
