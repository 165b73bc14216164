//! VCF file parsing using noodles-vcf
//!
//! Parse failures are hard errors: the analysis must not silently proceed
//! with an empty variant list when the input file is malformed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles_vcf as nvcf;
use nvcf::variant::record::Ids;

use crate::error::PgxError;

use super::record::VcfRecord;

/// A parsed VCF file header
#[derive(Debug, Clone)]
pub struct VcfHeader {
    /// Contigs defined in the header (##contig lines)
    pub contigs: Vec<String>,
    /// Sample names from the header line
    pub samples: Vec<String>,
    /// Raw header for record parsing
    inner: nvcf::Header,
}

impl VcfHeader {
    /// Get the number of samples in the VCF
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Check if a contig is defined in the header
    pub fn has_contig(&self, name: &str) -> bool {
        self.contigs.iter().any(|c| c == name)
    }
}

/// VCF file reader that yields VcfRecord instances
pub struct VcfReader<R> {
    inner: nvcf::io::Reader<R>,
    header: VcfHeader,
}

impl<R: BufRead> VcfReader<R> {
    /// Create a new VCF reader from a buffered reader
    pub fn new(reader: R) -> Result<Self, PgxError> {
        let mut inner = nvcf::io::Reader::new(reader);
        let noodles_header = inner.read_header().map_err(|e| PgxError::VcfParse {
            msg: format!("Failed to parse VCF header: {}", e),
        })?;

        let contigs: Vec<String> = noodles_header
            .contigs()
            .keys()
            .map(|k| k.to_string())
            .collect();

        let samples: Vec<String> = noodles_header
            .sample_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let header = VcfHeader {
            contigs,
            samples,
            inner: noodles_header,
        };

        Ok(Self { inner, header })
    }

    /// Get a reference to the parsed header
    pub fn header(&self) -> &VcfHeader {
        &self.header
    }

    /// Read the next VCF record
    pub fn read_record(&mut self) -> Result<Option<VcfRecord>, PgxError> {
        let mut record = nvcf::variant::RecordBuf::default();

        match self.inner.read_record_buf(&self.header.inner, &mut record) {
            Ok(0) => Ok(None), // EOF
            Ok(_) => Ok(Some(convert_record(&record)?)),
            Err(e) => Err(PgxError::VcfParse {
                msg: format!("Failed to parse VCF record: {}", e),
            }),
        }
    }

    /// Iterate over all records in the VCF file
    pub fn records(self) -> VcfRecordIterator<R> {
        VcfRecordIterator {
            reader: self,
            done: false,
        }
    }
}

/// Open a VCF file from a path, transparently decompressing `.gz` inputs
pub fn open_vcf<P: AsRef<Path>>(path: P) -> Result<VcfReader<Box<dyn BufRead>>, PgxError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PgxError::Io {
        msg: format!("Failed to open VCF file {}: {}", path.display(), e),
    })?;

    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    VcfReader::new(reader)
}

/// Parse VCF from a string
pub fn parse_vcf_string(vcf_content: &str) -> Result<VcfReader<BufReader<&[u8]>>, PgxError> {
    let reader = BufReader::new(vcf_content.as_bytes());
    VcfReader::new(reader)
}

/// Iterator over VCF records
pub struct VcfRecordIterator<R> {
    reader: VcfReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for VcfRecordIterator<R> {
    type Item = Result<VcfRecord, PgxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Convert a noodles VCF record to our VcfRecord type
fn convert_record(record: &nvcf::variant::RecordBuf) -> Result<VcfRecord, PgxError> {
    let chrom = record.reference_sequence_name().to_string();

    // noodles uses 1-based positions
    let pos = record
        .variant_start()
        .map(|p| p.get() as u64)
        .ok_or_else(|| PgxError::VcfParse {
            msg: "Missing position in VCF record".to_string(),
        })?;

    // ID column: "." (empty set) yields no identifiers; multi-ID records
    // are split into individual entries
    let ids: Vec<String> = record.ids().iter().map(|id| id.to_string()).collect();

    let reference = record.reference_bases().to_string();

    let alternate: Vec<String> = record
        .alternate_bases()
        .as_ref()
        .iter()
        .map(|a| a.to_string())
        .collect();

    Ok(VcfRecord {
        chrom,
        pos,
        ids,
        reference,
        alternate,
    })
}
