/// Sparse document-term count matrix.
///
/// Row `d` holds `(column, count)` pairs for document `d`, sorted by column.
/// Column indices are positions in the paired vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTermMatrix {
    rows: Vec<Vec<(usize, u32)>>,
    n_terms: usize,
}

impl DocumentTermMatrix {
    pub fn new(mut rows: Vec<Vec<(usize, u32)>>, n_terms: usize) -> Self {
        for row in &mut rows {
            row.retain(|&(col, count)| count > 0 && col < n_terms);
            row.sort_unstable_by_key(|&(col, _)| col);
        }
        Self { rows, n_terms }
    }

    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    /// Non-zero entries of one document's row. Empty for an out-of-range index.
    pub fn row(&self, document: usize) -> &[(usize, u32)] {
        self.rows.get(document).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Columns present in a document, ascending.
    pub fn nonzero_columns(&self, document: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(document).iter().map(|&(col, _)| col)
    }

    /// Number of documents containing the term at `column`.
    pub fn document_frequency(&self, column: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.binary_search_by_key(&column, |&(c, _)| c).is_ok())
            .count()
    }
}

/// Output of the vectorizer: a shared vocabulary and the matrix indexed by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorizedCorpus {
    pub vocabulary: Vec<String>,
    pub matrix: DocumentTermMatrix,
}

impl VectorizedCorpus {
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
