use serde::Serialize;
use sha1_smol::Sha1;
use crate::runtime::value::Value;

// one console.log call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub line: usize,
    pub values: Vec<Value>,
}

impl LogEntry {
    pub fn render(&self) -> String {
        self.values.iter().map(|x| x.to_log_string()).collect::<Vec<String>>().join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub entries: Vec<LogEntry>,
}

impl Transcript {
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|x| x.render()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    // sha1 over the rendered lines, each terminated by \n
    pub fn digest(&self) -> String {
        let mut hasher = Sha1::new();
        for line in self.lines() {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }
        hasher.digest().to_string()
    }
}
