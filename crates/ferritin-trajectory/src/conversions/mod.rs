mod pdb;
