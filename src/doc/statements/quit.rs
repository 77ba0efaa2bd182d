/*!
# `QUIT`

## Purpose
Leave BASIC.

## Remarks
The program in memory is not saved anywhere.

*/
