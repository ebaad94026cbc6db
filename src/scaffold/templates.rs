//! Built-in file templates for new bundles.
//!
//! Placeholders are `{skill_name}` and `{skill_title}`.

pub const SKILL_TEMPLATE: &str = r#"---
name: {skill_name}
description: "TODO: Replace with a specific description of what this skill does and when to use it."
---

# {skill_title}

## Overview

[TODO: 1-2 sentences describing the capability this skill adds.]

## Instructions

### Step 1: Understand the request
[TODO: List what to inspect, ask, or verify before acting.]

### Step 2: Execute the core workflow
[TODO: Add the main workflow. Prefer explicit steps for fragile tasks.]

### Step 3: Validate the result
[TODO: Add checks/tests/verification steps.]

## Examples

Example 1: [common scenario]
User says: "Set up a new marketing campaign"
Actions:
Fetch existing campaigns via MCP
Create new campaign with provided parameters
Result: Campaign created with confirmation link
(Add more examples as needed)

## Troubleshooting

Error: [Common error message]
Cause: [Why it happens]
Solution: [How to fix]

(Add more error cases as needed)

## Resources

### scripts/
Executable code (Python/Bash/etc.) that can be run directly to perform specific operations.

**Appropriate for:** Python scripts, shell scripts, or any executable code that performs automation, data processing, or specific operations.

**Note:** Scripts may be executed without loading into context, but can still be read by the agent for patching or environment adjustments.

### references/
Documentation and reference material intended to be loaded into context to inform the agent's process and thinking.

**Appropriate for:** In-depth documentation, API references, database schemas, comprehensive guides, or any detailed information the agent should reference while working.

### assets/
Files not intended to be loaded into context, but rather used within the output the agent produces.

**Appropriate for:** Templates, boilerplate code, document templates, images, icons, fonts, or any files meant to be copied or used in the final output.

---

**Any unneeded directories can be deleted.** Not every skill requires all three types of resources.
"#;

pub const EXAMPLE_SCRIPT: &str = r#"#!/usr/bin/env python3
"""
Placeholder script for {skill_name}

Replace with real logic or delete this file if no script is needed.
"""

def main():
    print("This is an example script for {skill_name}")

if __name__ == "__main__":
    main()
"#;

pub const EXAMPLE_REFERENCE: &str = "# {skill_title} Reference

Replace with task-specific reference material or delete this file.

Suggested uses:
- API endpoints / schemas
- Command cheatsheets
- Decision tables
- Detailed workflow notes
";

pub const EXAMPLE_ASSET: &str = "# Example Asset File

Replace with a real asset (template/image/font/etc.) or delete this file.
";

/// Substitute the name and title placeholders.
#[must_use]
pub fn render(template: &str, skill_name: &str, skill_title: &str) -> String {
    template
        .replace("{skill_name}", skill_name)
        .replace("{skill_title}", skill_title)
}
