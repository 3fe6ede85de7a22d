use chainwire_types::Hash;

/// Raw bytes of the hash; zero length for the zero-value.
pub fn hash_to_wire(hash: &Hash) -> Vec<u8> {
    hash.as_bytes().to_vec()
}

/// Takes ownership of the wire bytes. Any length is accepted; an empty field
/// is the zero-value hash.
pub fn hash_from_wire(bytes: Vec<u8>) -> Hash {
    if bytes.is_empty() {
        return Hash::default();
    }
    Hash::new(bytes)
}
