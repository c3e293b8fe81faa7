mod property_roundtrip;
mod traversal;
