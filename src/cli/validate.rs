use std::path::Path;

pub fn path(rawpath: &str) -> Result<(), String> {
    if !Path::new(&rawpath).exists() {
        Err(format!("{} file doesn't exist or there is no permission to read it", rawpath))
    } else {
        Ok(())
    }
}

pub fn writable(_rawpath: &str) -> Result<(), String> {
    // TODO: probe the parent directory for write permissions
    Ok(())
}
