//! Integration scenarios across the registry and systems
