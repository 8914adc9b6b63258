use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(Contact::export_to_string()?));
    types.push(clean_type(NewContact::export_to_string()?));
    types.push(clean_type(CreateContactRequest::export_to_string()?));
    types.push(clean_type(UpdateContactRequest::export_to_string()?));
    types.push(clean_type(ContactsResponse::export_to_string()?));

    // Chat types
    types.push(clean_type(ChatRole::export_to_string()?));
    types.push(clean_type(ChatTurn::export_to_string()?));
    types.push(clean_type(ProductRecommendation::export_to_string()?));
    types.push(clean_type(GiftProduct::export_to_string()?));
    types.push(clean_type(ChatRequest::export_to_string()?));
    types.push(clean_type(ChatResponse::export_to_string()?));

    // Import types
    types.push(clean_type(ImportContactsRequest::export_to_string()?));
    types.push(clean_type(ImportPreviewResponse::export_to_string()?));
    types.push(clean_type(ImportResultResponse::export_to_string()?));

    // Waitlist types
    types.push(clean_type(WaitlistRequest::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, types.join("\n\n"))?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(type_def: String) -> String {
    // Strip the per-type "generated file" banner.
    let lines: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = lines.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
