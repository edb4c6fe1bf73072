//! Language catalogue
//!
//! The set of languages the editor knows how to label, the `/{lang}-diff`
//! route slugs and the sample snippet pair shown on each language route.

use std::fmt;

/// Suffix of language landing routes (`/python-diff`)
pub const ROUTE_SUFFIX: &str = "-diff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Json,
    JavaScript,
    TypeScript,
    Python,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    CSharp,
    Php,
    Ruby,
    Html,
    Css,
    Sql,
    Yaml,
    Xml,
    Markdown,
    Shell,
}

impl Language {
    /// Every supported language, in the order F2 cycles through them
    pub const ALL: [Language; 19] = [
        Language::Json,
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Rust,
        Language::Go,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Php,
        Language::Ruby,
        Language::Html,
        Language::Css,
        Language::Sql,
        Language::Yaml,
        Language::Xml,
        Language::Markdown,
        Language::Shell,
    ];

    /// Tag stored in `EditorState::language` and sent to the API
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Html => "html",
            Self::Css => "css",
            Self::Sql => "sql",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Sql => "SQL",
            Self::Yaml => "YAML",
            Self::Xml => "XML",
            Self::Markdown => "Markdown",
            Self::Shell => "Shell",
        }
    }

    /// Look up a language by tag, ignoring case and a few common aliases
    pub fn from_tag(tag: &str) -> Option<Language> {
        let tag = tag.trim().to_ascii_lowercase();
        let canonical = match tag.as_str() {
            "js" => "javascript",
            "ts" => "typescript",
            "py" => "python",
            "rs" => "rust",
            "golang" => "go",
            "c++" => "cpp",
            "c#" | "cs" => "csharp",
            "yml" => "yaml",
            "md" => "markdown",
            "bash" | "sh" => "shell",
            other => other,
        };
        Self::ALL.iter().copied().find(|l| l.tag() == canonical)
    }

    /// Parse a landing route slug such as `python-diff`
    pub fn from_route_slug(slug: &str) -> Option<Language> {
        slug.strip_suffix(ROUTE_SUFFIX)
            .and_then(|tag| Self::ALL.iter().copied().find(|l| l.tag() == tag))
    }

    pub fn route_slug(&self) -> String {
        format!("{}{}", self.tag(), ROUTE_SUFFIX)
    }

    /// Language following this one in [`Language::ALL`], wrapping around
    pub fn next(&self) -> Language {
        let index = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Sample `(before, after)` pair shown on the language's landing route
    pub fn sample(&self) -> (&'static str, &'static str) {
        match self {
            Self::Json => (
                "{\n  \"name\": \"code-diff\",\n  \"version\": \"1.0.0\",\n  \"private\": true\n}\n",
                "{\n  \"name\": \"code-diff\",\n  \"version\": \"1.1.0\",\n  \"private\": false,\n  \"license\": \"MIT\"\n}\n",
            ),
            Self::JavaScript => (
                "function greet(name) {\n  console.log(\"Hello \" + name);\n}\n",
                "const greet = (name) => {\n  console.log(`Hello ${name}!`);\n};\n",
            ),
            Self::TypeScript => (
                "function area(w, h) {\n  return w * h;\n}\n",
                "function area(w: number, h: number): number {\n  return w * h;\n}\n",
            ),
            Self::Python => (
                "def total(items):\n    result = 0\n    for item in items:\n        result += item\n    return result\n",
                "def total(items: list[int]) -> int:\n    return sum(items)\n",
            ),
            Self::Rust => (
                "fn main() {\n    let v = vec![1, 2, 3];\n    for i in 0..v.len() {\n        println!(\"{}\", v[i]);\n    }\n}\n",
                "fn main() {\n    let v = vec![1, 2, 3];\n    for x in &v {\n        println!(\"{x}\");\n    }\n}\n",
            ),
            Self::Go => (
                "func sum(a int, b int) int {\n\treturn a + b\n}\n",
                "func sum(nums ...int) int {\n\ttotal := 0\n\tfor _, n := range nums {\n\t\ttotal += n\n\t}\n\treturn total\n}\n",
            ),
            Self::Java => (
                "public class Hello {\n    public static void main(String[] args) {\n        System.out.println(\"Hello\");\n    }\n}\n",
                "public class Hello {\n    public static void main(String[] args) {\n        var name = args.length > 0 ? args[0] : \"World\";\n        System.out.println(\"Hello \" + name);\n    }\n}\n",
            ),
            Self::C => (
                "#include <stdio.h>\n\nint main() {\n    printf(\"hello\\n\");\n}\n",
                "#include <stdio.h>\n\nint main(void) {\n    printf(\"hello, world\\n\");\n    return 0;\n}\n",
            ),
            Self::Cpp => (
                "#include <iostream>\n\nint main() {\n    std::cout << \"hi\" << std::endl;\n}\n",
                "#include <iostream>\n\nint main() {\n    std::cout << \"hi\\n\";\n    return 0;\n}\n",
            ),
            Self::CSharp => (
                "class Program {\n    static void Main() {\n        Console.WriteLine(\"Hi\");\n    }\n}\n",
                "Console.WriteLine(\"Hi\");\n",
            ),
            Self::Php => (
                "<?php\nfunction greet($name) {\n    echo \"Hello \" . $name;\n}\n",
                "<?php\nfunction greet(string $name): void {\n    echo \"Hello {$name}\";\n}\n",
            ),
            Self::Ruby => (
                "def greet(name)\n  puts \"Hello \" + name\nend\n",
                "def greet(name)\n  puts \"Hello #{name}\"\nend\n",
            ),
            Self::Html => (
                "<div class=\"card\">\n  <h1>Title</h1>\n</div>\n",
                "<section class=\"card\">\n  <h1>Title</h1>\n  <p>Body</p>\n</section>\n",
            ),
            Self::Css => (
                ".card {\n  color: #333;\n  margin: 10px;\n}\n",
                ".card {\n  color: #222;\n  margin: 1rem;\n  padding: 1rem;\n}\n",
            ),
            Self::Sql => (
                "SELECT * FROM users WHERE active = 1;\n",
                "SELECT id, email\nFROM users\nWHERE active = TRUE\nORDER BY email;\n",
            ),
            Self::Yaml => (
                "server:\n  port: 8080\n  debug: true\n",
                "server:\n  port: 9090\n  debug: false\n  workers: 4\n",
            ),
            Self::Xml => (
                "<config>\n  <port>8080</port>\n</config>\n",
                "<config>\n  <port>9090</port>\n  <host>localhost</host>\n</config>\n",
            ),
            Self::Markdown => (
                "# Title\n\nSome text.\n",
                "# Title\n\nSome **bold** text.\n\n- item\n",
            ),
            Self::Shell => (
                "#!/bin/sh\necho $1\n",
                "#!/usr/bin/env bash\nset -euo pipefail\necho \"${1:-}\"\n",
            ),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How the editor presents a buffer for a given language tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxMode {
    Language(Language),
    /// Fallback for tags outside the catalogue
    Plaintext,
}

impl SyntaxMode {
    pub fn for_tag(tag: &str) -> SyntaxMode {
        Language::from_tag(tag)
            .map(SyntaxMode::Language)
            .unwrap_or(SyntaxMode::Plaintext)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Language(language) => language.display_name(),
            Self::Plaintext => "Plain Text",
        }
    }
}
