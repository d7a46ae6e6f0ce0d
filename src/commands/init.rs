//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::loader::{CAREER_FILE, PROJECTS_FILE, SKILLS_FILE};

const CONFIG: &str = r#"# Portfolio configuration

# Site
title: Portfolio
tagline: Backend & Security Enthusiast
author: John Doe
description: Personal portfolio with skills, projects and career history
language: en
root: /

# About section
about:
  paragraphs:
    - I build backend services and enjoy taking them apart to see where they break.
    - Currently studying computer science with a focus on network security.
  location: Tokyo, Japan
  education: B.S. Computer Science

# Links shown in the footer
social:
  github: https://github.com/johndoe
  twitter: ''
  website: ''
  email: john@example.com

# Directories
data_dir: data
detail_dir: data/projects
public_dir: public
static_dir: static

# Server
server:
  ip: localhost
  port: 4000
"#;

const SKILLS: &str = r#"{
  "languages": [
    { "name": "Python", "icon": "Code", "level": 90 },
    { "name": "Go", "icon": "Code", "level": 75 },
    { "name": "SQL", "icon": "Database", "level": 70 }
  ],
  "frameworks": [
    { "name": "FastAPI", "icon": "Code", "level": 80 },
    { "name": "React", "icon": "Code", "level": 60 }
  ],
  "tools": [
    { "name": "Docker", "icon": "Briefcase", "level": 80 },
    { "name": "Wireshark", "icon": "Shield", "level": 65 }
  ],
  "certifications": [
    { "name": "Fundamental Information Technology Engineer", "icon": "Award", "date": "2023" }
  ]
}
"#;

const PROJECTS: &str = r#"[
  {
    "title": "Secure File Share",
    "description": "End-to-end encrypted file sharing with expiring links.",
    "tags": ["Python", "FastAPI", "Cryptography"],
    "githubUrl": "https://github.com/johndoe/secure-file-share",
    "detailFile": "secure-file-share.md"
  },
  {
    "title": "Packet Dashboard",
    "description": "Live traffic statistics from a home network tap.",
    "tags": ["Go", "React"],
    "liveUrl": "https://example.com/packets"
  }
]
"#;

const CAREER: &str = r#"[
  { "date": "2022", "title": "Entered university", "description": "Started a computer science degree." },
  { "date": "2023", "title": "CTF team", "description": "Joined the campus security club." },
  { "date": "2024", "title": "Backend internship", "description": "Built internal APIs for a logistics startup." }
]
"#;

const DETAIL: &str = r#"# Secure File Share

Files are encrypted in the browser before upload, so the server only ever
stores **ciphertext**.

## Features

- Expiring download links
- Per-file keys derived with `HKDF`
- Audit log of every access

## Running locally

```bash
docker compose up
```
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let data_dir = target_dir.join("data");
    let detail_dir = data_dir.join("projects");
    fs::create_dir_all(&detail_dir)?;
    fs::create_dir_all(target_dir.join("static"))?;

    fs::write(&config_path, CONFIG)?;
    fs::write(data_dir.join(SKILLS_FILE), SKILLS)?;
    fs::write(data_dir.join(PROJECTS_FILE), PROJECTS)?;
    fs::write(data_dir.join(CAREER_FILE), CAREER)?;
    fs::write(detail_dir.join("secure-file-share.md"), DETAIL)?;

    Ok(())
}
