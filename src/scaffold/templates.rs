//! Embedded gold-standard project templates.
//!
//! Templates live in the binary (no data files to ship) and use a fixed
//! `{{key}}` placeholder set substituted by [`render`]. The rendered tree
//! must satisfy every catalog check; `tests/scaffold_gold_test.rs` holds
//! that invariant.

/// One file of the template set. Both the path and the contents may
/// contain placeholders.
pub struct TemplateFile {
    pub path: &'static str,
    pub contents: &'static str,
}

/// Substitution context for one scaffold run.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    /// Distribution name, e.g. `demo-pkg`.
    pub name: String,
    /// Import name derived from `name`, e.g. `demo_pkg`.
    pub module: String,
    pub description: String,
    pub org: String,
    pub author: String,
    pub email: String,
    pub license: String,
}

impl TemplateContext {
    pub fn new(
        name: &str,
        description: &str,
        org: &str,
        author: &str,
        email: &str,
        license: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            module: name.replace('-', "_"),
            description: description.to_string(),
            org: org.to_string(),
            author: author.to_string(),
            email: email.to_string(),
            license: license.to_string(),
        }
    }
}

/// Substitute the fixed placeholder set into a template string.
pub fn render(template: &str, ctx: &TemplateContext) -> String {
    template
        .replace("{{name}}", &ctx.name)
        .replace("{{module}}", &ctx.module)
        .replace("{{description}}", &ctx.description)
        .replace("{{org}}", &ctx.org)
        .replace("{{author}}", &ctx.author)
        .replace("{{email}}", &ctx.email)
        .replace("{{license}}", &ctx.license)
}

/// LICENSE body for the chosen license. Full text for MIT (the default);
/// an SPDX pointer otherwise, for the author to replace with the real
/// text.
pub fn license_text(license: &str, author: &str) -> String {
    match license {
        "MIT" => MIT_LICENSE.replace("{{author}}", author),
        other => format!(
            "Copyright (c) {author}\n\nLicensed under the {other} license.\nSee https://spdx.org/licenses/{other}.html for the full text.\n"
        ),
    }
}

const MIT_LICENSE: &str = r##"MIT License

Copyright (c) {{author}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"##;

/// The full template set, one entry per file written by `gilt init`.
/// LICENSE is handled separately via [`license_text`].
pub const TEMPLATE_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "pyproject.toml",
        contents: r##"[project]
name = "{{name}}"
description = "{{description}}"
readme = "README.md"
license = { text = "{{license}}" }
requires-python = ">=3.12"
authors = [{ name = "{{author}}", email = "{{email}}" }]
dynamic = ["version"]
classifiers = [
    "Development Status :: 3 - Alpha",
    "Programming Language :: Python :: 3.12",
    "Programming Language :: Python :: 3.13",
    "Typing :: Typed",
]

[project.urls]
Homepage = "https://github.com/{{org}}/{{name}}"
Documentation = "https://{{org}}.github.io/{{name}}/"
Repository = "https://github.com/{{org}}/{{name}}"
Issues = "https://github.com/{{org}}/{{name}}/issues"

[build-system]
requires = ["hatchling", "hatch-vcs"]
build-backend = "hatchling.build"

[tool.hatch.version]
source = "vcs"

[dependency-groups]
dev = [
    "pytest>=8",
    "pytest-cov>=6",
    "ruff>=0.8",
    "mypy>=1.13",
    "pre-commit>=4",
    "pip-audit>=2.7",
]
docs = [
    "mkdocs-material>=9",
    "mkdocstrings[python]>=0.27",
    "mkdocs-gen-files>=0.5",
    "mkdocs-literate-nav>=0.6",
]

[tool.mypy]
strict = true
pretty = true
disallow_incomplete_defs = true
check_untyped_defs = true

[tool.ruff.lint]
select = ["E", "F", "I", "UP", "B"]

[tool.ruff.lint.per-file-ignores]
"tests/*" = ["S101"]

[tool.ruff.lint.isort]
known-first-party = ["{{module}}"]

[tool.pytest.ini_options]
addopts = ["--strict-markers", "--strict-config", "--import-mode=importlib"]
pythonpath = ["src"]
filterwarnings = ["error"]
testpaths = ["tests"]

[tool.coverage.run]
branch = true
relative_files = true
source = ["src"]

[tool.coverage.xml]
output = "coverage.xml"

[tool.coverage.report]
exclude_lines = ["if TYPE_CHECKING:", "raise NotImplementedError"]

[tool.git-cliff.changelog]
header = "# Changelog\n"
body = "{% for commit in commits %}- {{ commit.message }}\n{% endfor %}"

[tool.git-cliff.git]
conventional_commits = true
"##,
    },
    TemplateFile {
        path: "README.md",
        contents: r##"# {{name}}

{{description}}

## Features

- Typed, tested, and documented from the first commit
- Gold-standard CI, packaging, and release automation

## Installation

```bash
pip install {{name}}
```

## Development

```bash
make install
make check
```

## License

{{license}}
"##,
    },
    TemplateFile {
        path: "CONTRIBUTING.md",
        contents: r##"# Contributing to {{name}}

## Development setup

```bash
make install
```

This syncs all dependency groups with uv and installs the pre-commit hooks.

## Workflow

- `make check` runs lint, tests, and the dependency audit.
- Commit messages follow Conventional Commits; the pre-commit hook
  enforces the format and git-cliff generates the changelog from them.
- CI must be green before merge.
"##,
    },
    TemplateFile {
        path: "Makefile",
        contents: r##".PHONY: install check lint format test audit clean docs-serve

install:
	uv sync --all-groups
	uv run pre-commit install

check: lint test audit

lint:
	uv run ruff check src tests
	uv run mypy src

format:
	uv run ruff format src tests

test:
	uv run pytest --cov={{module}} --cov-report=term-missing

audit:
	uv run pip-audit

clean:
	rm -rf dist htmlcov coverage.xml .pytest_cache .mypy_cache .ruff_cache

docs-serve:
	uv run mkdocs serve
"##,
    },
    TemplateFile {
        path: ".python-version",
        contents: "3.12\n",
    },
    TemplateFile {
        path: "uv.lock",
        contents: r##"# Seed lockfile. Regenerated by `uv lock` on first sync.
version = 1
requires-python = ">=3.12"
"##,
    },
    TemplateFile {
        path: ".pre-commit-config.yaml",
        contents: r##"repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v5.0.0
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
      - id: check-yaml
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.8.4
    hooks:
      - id: ruff
        args: [--fix]
      - id: ruff-format
  - repo: https://github.com/pre-commit/mirrors-mypy
    rev: v1.13.0
    hooks:
      - id: mypy
  - repo: https://github.com/compilerla/conventional-pre-commit
    rev: v3.6.0
    hooks:
      - id: conventional-pre-commit
        stages: [commit-msg]
"##,
    },
    TemplateFile {
        path: "mkdocs.yml",
        contents: r##"site_name: {{name}}
site_description: {{description}}
repo_url: https://github.com/{{org}}/{{name}}

theme:
  name: material

nav:
  - Home: index.md
  - Tutorials: tutorials/index.md
  - How-To: how-to/index.md
  - Reference: reference/
  - Explanation: explanation/index.md

plugins:
  - search
  - gen-files:
      scripts:
        - docs/gen_ref_pages.py
  - literate-nav:
      nav_file: SUMMARY.md
  - mkdocstrings:
      handlers:
        python:
          paths: [src]
"##,
    },
    TemplateFile {
        path: "docs/index.md",
        contents: r##"# {{name}}

{{description}}
"##,
    },
    TemplateFile {
        path: "docs/tutorials/index.md",
        contents: "# Tutorials\n",
    },
    TemplateFile {
        path: "docs/how-to/index.md",
        contents: "# How-To Guides\n",
    },
    TemplateFile {
        path: "docs/explanation/index.md",
        contents: "# Explanation\n",
    },
    TemplateFile {
        path: "docs/gen_ref_pages.py",
        contents: r##""""Auto-generate API reference pages by walking the source tree.

Executed by the mkdocs-gen-files plugin during build: scans src/ for
modules and emits a ::: page for each, which mkdocstrings renders.
"""
from pathlib import Path

import mkdocs_gen_files

nav = mkdocs_gen_files.Nav()
src = Path("src")

for path in sorted(src.rglob("*.py")):
    module_path = path.relative_to(src).with_suffix("")
    parts = list(module_path.parts)
    if parts[-1] == "__init__":
        parts = parts[:-1]
        if not parts:
            continue
    elif parts[-1].startswith("_"):
        continue

    doc_path = Path(*parts).with_suffix(".md")
    full_doc_path = Path("reference", *parts).with_suffix(".md")
    module_name = ".".join(parts)

    with mkdocs_gen_files.open(full_doc_path, "w") as fd:
        fd.write(f"# `{module_name}`\n\n::: {module_name}\n")

    nav[parts] = doc_path.as_posix()

with mkdocs_gen_files.open("reference/SUMMARY.md", "w") as nav_file:
    nav_file.writelines(nav.build_literate_nav())
"##,
    },
    TemplateFile {
        path: ".github/workflows/ci.yml",
        contents: r##"name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  lint:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: astral-sh/setup-uv@v4
      - run: uv sync --group dev
      - run: make lint

  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        python-version: ["3.12", "3.13"]
    steps:
      - uses: actions/checkout@v4
      - uses: astral-sh/setup-uv@v4
        with:
          python-version: ${{ matrix.python-version }}
      - run: uv sync --group dev
      - run: uv run pytest --cov={{module}} --cov-report=lcov
      - uses: coverallsapp/github-action@v2
        with:
          file: coverage.lcov

  audit:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: astral-sh/setup-uv@v4
      - run: uv sync --group dev
      - run: uv run pip-audit
"##,
    },
    TemplateFile {
        path: ".github/workflows/publish.yml",
        contents: r##"name: Publish

on:
  release:
    types: [published]

jobs:
  publish:
    runs-on: ubuntu-latest
    environment: pypi
    permissions:
      id-token: write
    steps:
      - uses: actions/checkout@v4
        with:
          fetch-depth: 0
      - uses: astral-sh/setup-uv@v4
      - run: uv build
      - run: uv publish
"##,
    },
    TemplateFile {
        path: ".github/dependabot.yml",
        contents: r##"version: 2
updates:
  - package-ecosystem: pip
    directory: "/"
    schedule:
      interval: weekly
  - package-ecosystem: github-actions
    directory: "/"
    schedule:
      interval: weekly
"##,
    },
    TemplateFile {
        path: "src/{{module}}/__init__.py",
        contents: r##""""{{description}}"""

from importlib.metadata import PackageNotFoundError, version

try:
    __version__ = version("{{name}}")
except PackageNotFoundError:  # pragma: no cover
    __version__ = "0.0.0"
"##,
    },
    TemplateFile {
        path: "src/{{module}}/py.typed",
        contents: "",
    },
    TemplateFile {
        path: "tests/test_version.py",
        contents: r##""""Smoke test: the package exposes a version."""

import {{module}}


def test_version() -> None:
    assert {{module}}.__version__
"##,
    },
];
