//! Instruction templates sent to the model provider.
//!
//! The user's prompt is embedded verbatim; everything around it is fixed
//! text steering the model towards markup that the preview can render
//! without post-processing.

use crate::types::ContentType;

// ── Templates ───────────────────────────────────────────────────────────────

const HTML_GUIDELINES: &str = r#"Important Guidelines:
1. Include <!DOCTYPE html> and proper HTML structure
2. Include Tailwind CSS via CDN in the head section
3. DO NOT include any explanations or descriptions before or after the HTML code
4. Make sure the page is complete and ready to render
5. The content should be focused on the requested webpage only

Example format:
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Title</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
    <div class="container mx-auto p-4">
        <!-- Content here -->
    </div>
</body>
</html>"#;

const REACT_GUIDELINES: &str = r#"Important Guidelines:
1. DO NOT include any explanations, comments about the component, or descriptions before or after the code
2. DO NOT include import statements or export statements
3. The code should ONLY contain the JSX that would go inside a return statement
4. Use Tailwind CSS for styling
5. Make sure the component is properly structured and contains valid JSX

Example format:
<div className="container mx-auto p-4">
  <h1 className="text-2xl font-bold mb-4">Title</h1>
  <p className="text-gray-700">Content goes here</p>
</div>"#;

// ── Public API ───────────────────────────────────────────────────────────────

/// Build the full instruction for one generation.
pub fn instruction(prompt: &str, content_type: ContentType) -> String {
    match content_type {
        ContentType::Html => format!(
            "Generate a complete, valid HTML5 page using Tailwind CSS for: {}\n\n{}\n",
            prompt, HTML_GUIDELINES
        ),
        ContentType::React => format!(
            "Generate ONLY the JSX code for a React functional component using Tailwind CSS for: {}\n\n{}\n",
            prompt, REACT_GUIDELINES
        ),
    }
}
