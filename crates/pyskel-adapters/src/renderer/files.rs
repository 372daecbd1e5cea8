//! File bodies for the built-in Python blueprint.
//!
//! `{{KEY}}` placeholders are filled from a `RenderContext`. The toggled
//! pylint/mypy fragments are spliced in by the blueprint, not here.

pub(super) const PACKAGE_INIT: &str = r#"__version__ = "0.1.0"
"#;

pub(super) const TESTS_INIT: &str = "";

pub(super) const SMOKE_TEST: &str = r#"import {{PACKAGE_NAME}}


def test_version():
    assert {{PACKAGE_NAME}}.__version__ == "0.1.0"
"#;

pub(super) const GITIGNORE: &str = r#"# Byte-compiled / optimized files
__pycache__/
*.py[cod]

# Distribution / packaging
build/
dist/
*.egg-info/
.eggs/

# Test and coverage reports
.pytest_cache/
.coverage
htmlcov/

# Type checker
.mypy_cache/

# Environments
.env
.venv
venv/
"#;

pub(super) const README: &str = r#"# {{PACKAGE_NAME}}

{{SHORT_DESCRIPTION}}

## Development

```
make lint    # flake8 and black checks
make test    # pytest with coverage
make format  # reformat with black
make build   # sdist and wheel
make clean   # remove build artifacts
```
"#;

pub(super) const SETUP_PY: &str = r#"import os

from setuptools import find_packages, setup


HERE = os.path.abspath(os.path.dirname(__file__))
with open(os.path.join(HERE, "README.md")) as fobj:
    README = fobj.read()


setup(
    name="{{PACKAGE_NAME}}",
    version="0.1.0",
    description="{{SHORT_DESCRIPTION}}",
    long_description=README,
    classifiers=[],
    author="{{AUTHOR_NAME}}",
    author_email="{{AUTHOR_EMAIL}}",
    packages=find_packages(),
    install_requires=[],
    extras_require={
        "build": ["wheel<1"],
        "lint": [
            "flake8<4",
            "black==19.3b0",
{{LINT_EXTRAS}}        ],
        "test": ["pytest<5", "pytest-cov<3"],
    },
    zip_safe=False,
)
"#;

pub(super) const PYLINT_EXTRA: &str = "            \"pylint<3\",\n";
pub(super) const MYPY_EXTRA: &str = "            \"mypy<0.800\",\n";

pub(super) const SETUP_CFG: &str = r#"[flake8]
max-line-length = {{LINE_LENGTH}}
exclude = .git,__pycache__,build,dist

[tool:pytest]
testpaths = tests
"#;

pub(super) const PYPROJECT: &str = r#"[tool.poetry]
name = "{{PACKAGE_NAME}}"
version = "0.1.0"
description = "{{SHORT_DESCRIPTION}}"
authors = ["{{AUTHOR_NAME}} <{{AUTHOR_EMAIL}}>"]
readme = "README.md"

[tool.poetry.dependencies]
python = "^3.7"

[tool.poetry.dev-dependencies]
flake8 = "<4"
black = "19.3b0"
pytest = "<5"
pytest-cov = "<3"
{{DEV_EXTRAS}}
[tool.black]
line-length = {{LINE_LENGTH}}

[build-system]
requires = ["poetry>=0.12"]
build-backend = "poetry.masonry.api"
"#;

pub(super) const PYLINT_DEV: &str = "pylint = \"<3\"\n";
pub(super) const MYPY_DEV: &str = "mypy = \"<0.800\"\n";

// Recipe lines must start with a tab.
pub(super) const MAKEFILE: &str = "\
.PHONY: lint test format build clean

lint:
\tpip3 install -e .[lint]
\tflake8 {{PACKAGE_NAME}} tests
\tblack --line-length={{LINE_LENGTH}} --check --diff {{PACKAGE_NAME}} tests
{{LINT_COMMANDS}}
test:
\tpip3 install -e .[test]
\tpytest --cov={{PACKAGE_NAME}} tests

format:
\tblack --line-length={{LINE_LENGTH}} {{PACKAGE_NAME}} tests

build:
\tpip3 install -e .[build]
\tpython3 setup.py sdist bdist_wheel

clean:
\trm -rf build dist *.egg-info .pytest_cache .coverage
\tfind . -type d -name __pycache__ -prune -exec rm -rf {} +
";

pub(super) const PYLINT_COMMAND: &str = "\tpylint {{PACKAGE_NAME}} tests\n";
pub(super) const MYPY_COMMAND: &str = "\tmypy {{PACKAGE_NAME}} tests\n";
