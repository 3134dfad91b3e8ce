mod load;

use {
    serde_json::json,
    std::{fs, path::PathBuf},
    tempfile::TempDir,
};

/// Writes a small employee dataset into `dir` and returns its path.
fn write_employees(dir: &TempDir) -> PathBuf {
    let document = json!({
        "label": "Employee roster",
        "columns": [
            { "name": "ID", "type": "numeric" },
            { "name": "Name", "type": "character", "label": "Full name", "length": 20 },
            { "name": "AGE", "type": "numeric", "format": "3." },
            { "name": "DEPARTMENT", "type": "character" },
            { "name": "HIRED", "type": "numeric", "format": "DATE9." },
        ],
        "rows": [
            [1, "Ann", 34, "Sales", "2019-04-01"],
            [2, "Bob", 28, "IT", "2021-11-15"],
            [3, "Cid", null, "Sales", null],
            [4, "Dee", 45.5, "HR", "2015-06-30T08:00:00"],
            [5, "Eve", 52, "Sales", "2010-01-04"],
        ],
    });

    let path = dir.path().join("employees.json");
    fs::write(&path, document.to_string()).unwrap();

    path
}
